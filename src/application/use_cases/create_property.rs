use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{CreatePropertyRequest, PropertyDto};
use crate::application::ports::{
    ImageStore, PropertyRepository, RepositoryError, StorageError,
};
use crate::application::use_cases::IMAGE_FOLDER;
use crate::domain::entities::Property;

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("{0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: create a property together with its image
pub struct CreatePropertyUseCase {
    property_repo: Arc<dyn PropertyRepository>,
    image_store: Arc<dyn ImageStore>,
    public_base_url: String,
}

impl CreatePropertyUseCase {
    pub fn new(
        property_repo: Arc<dyn PropertyRepository>,
        image_store: Arc<dyn ImageStore>,
        public_base_url: String,
    ) -> Self {
        Self {
            property_repo,
            image_store,
            public_base_url,
        }
    }

    /// Execute the create workflow.
    ///
    /// The duplicate check runs before the image write so a rejected
    /// submission never leaves an orphaned file behind. There is no
    /// compensating delete if the insert fails afterwards.
    pub async fn execute(
        &self,
        request: CreatePropertyRequest,
    ) -> Result<PropertyDto, CreateError> {
        // 1. Reject duplicate name+address pairs.
        let exists = self
            .property_repo
            .exists_by_name_and_address(&request.name, &request.address)
            .await?;
        if exists {
            return Err(CreateError::Conflict(
                "A property with this name and address already exists".to_string(),
            ));
        }

        // 2. Persist the image; keep only the relative key.
        let image_key = self
            .image_store
            .save(request.image.bytes, &request.image.file_name, IMAGE_FOLDER)
            .await?;

        // 3. Insert the record; the store assigns the id.
        let mut property = Property::new(
            request.owner_id,
            request.name,
            request.address,
            request.price,
            image_key,
        );
        let id = self.property_repo.insert(&property).await?;
        property.assign_id(id);

        Ok(PropertyDto::from_entity(&property, &self.public_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ImageUpload;
    use crate::application::ports::{MockImageStore, MockPropertyRepository};
    use crate::domain::value_objects::PropertyId;
    use bytes::Bytes;
    use std::sync::Arc;

    fn sample_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            owner_id: "owner-1".to_string(),
            name: "Villa Sol".to_string(),
            address: "1 Main St".to_string(),
            price: 100000.0,
            image: ImageUpload {
                file_name: "house.png".to_string(),
                bytes: Bytes::from_static(b"fake png bytes"),
            },
        }
    }

    #[tokio::test]
    async fn test_create_property_happy_path() {
        // Arrange
        let mut mock_repo = MockPropertyRepository::new();
        let mut mock_store = MockImageStore::new();
        let id = PropertyId::new();

        mock_repo
            .expect_exists_by_name_and_address()
            .withf(|name, address| name == "Villa Sol" && address == "1 Main St")
            .times(1)
            .returning(|_, _| Ok(false));
        mock_store
            .expect_save()
            .withf(|_, hint, folder| hint == "house.png" && folder == "images")
            .times(1)
            .returning(|_, _, _| Ok("images/generated.png".to_string()));
        mock_repo
            .expect_insert()
            .withf(|p| p.id().is_none() && p.image_key() == "images/generated.png")
            .times(1)
            .returning(move |_| Ok(id));

        let use_case = CreatePropertyUseCase::new(
            Arc::new(mock_repo),
            Arc::new(mock_store),
            "http://localhost:8080".to_string(),
        );

        // Act
        let result = use_case.execute(sample_request()).await;

        // Assert
        let dto = result.unwrap();
        assert_eq!(dto.id, id.to_string());
        assert_eq!(dto.image_url, "http://localhost:8080/images/generated.png");
        assert_eq!(dto.price, 100000.0);
    }

    #[tokio::test]
    async fn test_create_property_conflict_skips_image_write() {
        // Arrange: no expectation on save — a call would fail the test,
        // pinning the check-before-write ordering.
        let mut mock_repo = MockPropertyRepository::new();
        let mock_store = MockImageStore::new();

        mock_repo
            .expect_exists_by_name_and_address()
            .times(1)
            .returning(|_, _| Ok(true));

        let use_case = CreatePropertyUseCase::new(
            Arc::new(mock_repo),
            Arc::new(mock_store),
            "http://localhost:8080".to_string(),
        );

        // Act
        let result = use_case.execute(sample_request()).await;

        // Assert
        assert!(matches!(result.unwrap_err(), CreateError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_property_storage_failure_propagates() {
        // Arrange
        let mut mock_repo = MockPropertyRepository::new();
        let mut mock_store = MockImageStore::new();

        mock_repo
            .expect_exists_by_name_and_address()
            .times(1)
            .returning(|_, _| Ok(false));
        mock_store.expect_save().times(1).returning(|_, _, _| {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        });

        let use_case = CreatePropertyUseCase::new(
            Arc::new(mock_repo),
            Arc::new(mock_store),
            "http://localhost:8080".to_string(),
        );

        // Act
        let result = use_case.execute(sample_request()).await;

        // Assert
        assert!(matches!(result.unwrap_err(), CreateError::Storage(_)));
    }
}
