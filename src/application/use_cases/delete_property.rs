use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::application::ports::{ImageStore, PropertyRepository, RepositoryError};
use crate::application::use_cases::IMAGE_FOLDER;
use crate::domain::value_objects::PropertyId;

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: delete a property and its image
pub struct DeletePropertyUseCase {
    property_repo: Arc<dyn PropertyRepository>,
    image_store: Arc<dyn ImageStore>,
}

impl DeletePropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            property_repo,
            image_store,
        }
    }

    /// Execute the delete workflow. Returns whether the record was removed.
    pub async fn execute(&self, id: &PropertyId) -> Result<bool, DeleteError> {
        // 1. Fetch; absent ids are a NotFound, not a silent success.
        let property = self
            .property_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DeleteError::NotFound(id.to_string()))?;

        // 2. Remove the image, best-effort. A missing file is already a
        //    no-op inside the store; anything else is logged and swallowed.
        if let Err(e) = self
            .image_store
            .delete(property.image_key(), IMAGE_FOLDER)
            .await
        {
            warn!(
                "Failed to delete image {} for property {}: {}",
                property.image_key(),
                id,
                e
            );
        }

        // 3. Remove the record.
        Ok(self.property_repo.delete(id).await?)
    }
}
