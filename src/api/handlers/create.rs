use axum::{
    extract::{Multipart, State},
    http::{header, HeaderName, StatusCode},
    response::Json,
};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::application::dto::{CreatePropertyRequest, ImageUpload, PropertyDto};
use crate::application::use_cases::CreatePropertyUseCase;

/// Documentation-only shape of the multipart create form.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreatePropertyForm {
    id_owner: String,
    name: String,
    address: String,
    price: f64,
    /// Image file for the listing
    #[schema(value_type = String, format = Binary)]
    image: String,
}

/// POST /api/properties
/// Create a property from a multipart form carrying the listing fields and
/// an image file
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "properties",
    request_body(content = CreatePropertyForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Property created", body = PropertyDto,
            headers(("Location" = String, description = "URL of the created property"))),
        (status = 400, description = "Missing or invalid form fields"),
        (status = 409, description = "A property with this name and address already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_handler(
    State(use_case): State<Arc<CreatePropertyUseCase>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<PropertyDto>), ApiError> {
    let mut owner_id = None;
    let mut name = None;
    let mut address = None;
    let mut price_raw = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "idOwner" => owner_id = Some(read_text(field).await?),
            "name" => name = Some(read_text(field).await?),
            "address" => address = Some(read_text(field).await?),
            "price" => price_raw = Some(read_text(field).await?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Failed to read image field: {}", e))
                })?;
                image = Some(ImageUpload { file_name, bytes });
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    let owner_id = owner_id.ok_or_else(|| ApiError::bad_request("idOwner is required"))?;
    let name = name.ok_or_else(|| ApiError::bad_request("name is required"))?;
    let address = address.ok_or_else(|| ApiError::bad_request("address is required"))?;
    let price_raw = price_raw.ok_or_else(|| ApiError::bad_request("price is required"))?;
    let price: f64 = price_raw
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("price must be a number"))?;
    let image = image.ok_or_else(|| ApiError::bad_request("image file is required"))?;
    if image.bytes.is_empty() {
        return Err(ApiError::bad_request("image file is empty"));
    }

    let request = CreatePropertyRequest {
        owner_id,
        name,
        address,
        price,
        image,
    };
    request
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let property = use_case.execute(request).await?;

    let location = format!("/api/properties/{}", property.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(property),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read field {}: {}", name, e)))
}
