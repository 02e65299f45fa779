use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::PropertyDto;
use crate::application::use_cases::GetPropertyUseCase;
use crate::domain::value_objects::PropertyId;

/// GET /api/properties/{id}
/// Fetch a single property by id
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Property found", body = PropertyDto),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_handler(
    State(use_case): State<Arc<GetPropertyUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<PropertyDto>, ApiError> {
    // A malformed identifier counts as absent, not as a validation failure.
    let property_id = id
        .parse::<PropertyId>()
        .map_err(|_| ApiError::not_found(format!("Property not found: {}", id)))?;

    let property = use_case.execute(&property_id).await?;

    Ok(Json(property))
}
