use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{PropertyDto, PropertyFilter};
use crate::application::ports::{PropertyRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: list properties with optional filters
pub struct ListPropertiesUseCase {
    property_repo: Arc<dyn PropertyRepository>,
    public_base_url: String,
}

impl ListPropertiesUseCase {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, public_base_url: String) -> Self {
        Self {
            property_repo,
            public_base_url,
        }
    }

    /// Pass the filter through to the repository and map to wire DTOs.
    pub async fn execute(&self, filter: PropertyFilter) -> Result<Vec<PropertyDto>, ListError> {
        let properties = self.property_repo.list(&filter).await?;

        Ok(properties
            .iter()
            .map(|p| PropertyDto::from_entity(p, &self.public_base_url))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPropertyRepository;
    use crate::domain::entities::Property;
    use crate::domain::value_objects::PropertyId;
    use std::sync::Arc;

    fn sample_property(name: &str, price: f64) -> Property {
        Property::reconstruct(
            PropertyId::new(),
            "owner-1".to_string(),
            name.to_string(),
            "1 Main St".to_string(),
            price,
            "images/a.png".to_string(),
        )
    }

    #[tokio::test]
    async fn test_list_maps_entities_to_dtos() {
        // Arrange
        let mut mock_repo = MockPropertyRepository::new();
        let properties = vec![sample_property("Villa Sol", 100.0), sample_property("Casa Luna", 300.0)];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move |_| Ok(properties.clone()));

        let use_case =
            ListPropertiesUseCase::new(Arc::new(mock_repo), "http://localhost:8080".to_string());

        // Act
        let result = use_case.execute(PropertyFilter::default()).await;

        // Assert
        let dtos = result.unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].name, "Villa Sol");
        assert_eq!(dtos[0].image_url, "http://localhost:8080/images/a.png");
    }

    #[tokio::test]
    async fn test_list_forwards_the_filter() {
        // Arrange
        let mut mock_repo = MockPropertyRepository::new();
        let filter = PropertyFilter {
            name: Some("villa".to_string()),
            min_price: Some(150.0),
            ..Default::default()
        };
        let expected = filter.clone();
        mock_repo
            .expect_list()
            .withf(move |f| *f == expected)
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case =
            ListPropertiesUseCase::new(Arc::new(mock_repo), "http://localhost:8080".to_string());

        // Act
        let result = use_case.execute(filter).await;

        // Assert
        assert!(result.unwrap().is_empty());
    }
}
