use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::DeletePropertyUseCase;
use crate::domain::value_objects::PropertyId;

/// DELETE /api/properties/{id}
/// Delete a property and its stored image
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_handler(
    State(use_case): State<Arc<DeletePropertyUseCase>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // A malformed identifier counts as absent, not as a validation failure.
    let property_id = id
        .parse::<PropertyId>()
        .map_err(|_| ApiError::not_found(format!("Property not found: {}", id)))?;

    use_case.execute(&property_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
