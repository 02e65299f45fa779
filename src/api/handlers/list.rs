use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::api::errors::ApiError;
use crate::application::dto::{PropertyDto, PropertyFilter};
use crate::application::use_cases::ListPropertiesUseCase;

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive name pattern
    name: Option<String>,
    /// Case-insensitive address pattern
    address: Option<String>,
    /// Inclusive lower price bound
    min_price: Option<f64>,
    /// Inclusive upper price bound
    max_price: Option<f64>,
}

/// GET /api/properties
/// List properties, optionally filtered by name, address, and price range
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "properties",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching properties", body = [PropertyDto]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListPropertiesUseCase>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PropertyDto>>, ApiError> {
    let filter = PropertyFilter {
        name: query.name,
        address: query.address,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let properties = use_case.execute(filter).await?;

    Ok(Json(properties))
}
