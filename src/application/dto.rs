use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::Property;

/// Wire DTO for property responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: String,
    pub id_owner: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub image_url: String,
}

impl PropertyDto {
    /// Explicit entity → DTO mapping. The absolute image URL is resolved
    /// from the serving configuration here; only the relative key is
    /// persisted.
    pub fn from_entity(property: &Property, public_base_url: &str) -> Self {
        Self {
            id: property.id().map(|id| id.to_string()).unwrap_or_default(),
            id_owner: property.owner_id().to_string(),
            name: property.name().to_string(),
            address: property.address().to_string(),
            price: property.price(),
            image_url: resolve_image_url(public_base_url, property.image_key()),
        }
    }
}

/// Build the public URL for a stored image key.
pub fn resolve_image_url(public_base_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        public_base_url.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

/// Filter parameters for the list operation; `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Validated input for the create operation.
///
/// `id` and the image URL are deliberately absent: the store assigns the
/// former and the service derives the latter from the saved image.
#[derive(Debug, Clone, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, message = "idOwner is required"))]
    pub owner_id: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub image: ImageUpload,
}

/// Raw uploaded image: original file name plus bytes.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PropertyId;

    #[test]
    fn test_resolve_image_url_joins_base_and_key() {
        assert_eq!(
            resolve_image_url("http://localhost:8080", "images/a.png"),
            "http://localhost:8080/images/a.png"
        );
    }

    #[test]
    fn test_resolve_image_url_tolerates_stray_slashes() {
        assert_eq!(
            resolve_image_url("http://localhost:8080/", "/images/a.png"),
            "http://localhost:8080/images/a.png"
        );
    }

    #[test]
    fn test_dto_wire_names_are_camel_case() {
        let id = PropertyId::new();
        let property = Property::reconstruct(
            id,
            "o1".to_string(),
            "Villa Sol".to_string(),
            "1 Main St".to_string(),
            100000.0,
            "images/a.png".to_string(),
        );

        let dto = PropertyDto::from_entity(&property, "http://localhost:8080");
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["idOwner"], "o1");
        assert_eq!(json["price"], 100000.0);
        assert_eq!(json["imageUrl"], "http://localhost:8080/images/a.png");
    }

    #[test]
    fn test_create_request_validation() {
        let valid = CreatePropertyRequest {
            owner_id: "o1".to_string(),
            name: "Villa Sol".to_string(),
            address: "1 Main St".to_string(),
            price: 100.0,
            image: ImageUpload {
                file_name: "a.png".to_string(),
                bytes: Bytes::from_static(b"png"),
            },
        };
        assert!(valid.validate().is_ok());

        let mut missing_name = valid.clone();
        missing_name.name = String::new();
        assert!(missing_name.validate().is_err());

        let mut negative_price = valid.clone();
        negative_price.price = -1.0;
        assert!(negative_price.validate().is_err());
    }
}
