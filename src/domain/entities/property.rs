use crate::domain::value_objects::PropertyId;

/// A real-estate listing. The single aggregate of this service.
///
/// `image_key` is the relative storage key of the listing's image
/// (e.g. `images/550e8400-….png`); the absolute URL is resolved against the
/// serving configuration at read time, not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    id: Option<PropertyId>,
    owner_id: String,
    name: String,
    address: String,
    price: f64,
    image_key: String,
}

impl Property {
    /// Create a new property with no identifier. The store assigns the id on
    /// insert.
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        price: f64,
        image_key: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            owner_id: owner_id.into(),
            name: name.into(),
            address: address.into(),
            price,
            image_key: image_key.into(),
        }
    }

    /// Reconstruct from storage.
    pub fn reconstruct(
        id: PropertyId,
        owner_id: String,
        name: String,
        address: String,
        price: f64,
        image_key: String,
    ) -> Self {
        Self {
            id: Some(id),
            owner_id,
            name,
            address,
            price,
            image_key,
        }
    }

    /// Attach the store-assigned identifier after a successful insert.
    pub fn assign_id(&mut self, id: PropertyId) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<PropertyId> {
        self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image_key(&self) -> &str {
        &self.image_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_property_has_no_id() {
        let property = Property::new("owner-1", "Villa Sol", "1 Main St", 100.0, "images/a.png");

        assert!(property.id().is_none());
        assert_eq!(property.name(), "Villa Sol");
        assert_eq!(property.price(), 100.0);
    }

    #[test]
    fn test_assign_id_after_insert() {
        let mut property = Property::new("owner-1", "Villa Sol", "1 Main St", 100.0, "images/a.png");
        let id = PropertyId::new();

        property.assign_id(id);

        assert_eq!(property.id(), Some(id));
    }

    #[test]
    fn test_reconstruct_round_trip() {
        let id = PropertyId::new();
        let property = Property::reconstruct(
            id,
            "owner-1".to_string(),
            "Casa Luna".to_string(),
            "2 Side St".to_string(),
            300.0,
            "images/b.jpg".to_string(),
        );

        assert_eq!(property.id(), Some(id));
        assert_eq!(property.address(), "2 Side St");
        assert_eq!(property.image_key(), "images/b.jpg");
    }
}
