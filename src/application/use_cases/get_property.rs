use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::PropertyDto;
use crate::application::ports::{PropertyRepository, RepositoryError};
use crate::domain::value_objects::PropertyId;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: fetch a single property by id
pub struct GetPropertyUseCase {
    property_repo: Arc<dyn PropertyRepository>,
    public_base_url: String,
}

impl GetPropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, public_base_url: String) -> Self {
        Self {
            property_repo,
            public_base_url,
        }
    }

    pub async fn execute(&self, id: &PropertyId) -> Result<PropertyDto, GetError> {
        let property = self
            .property_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| GetError::NotFound(id.to_string()))?;

        Ok(PropertyDto::from_entity(&property, &self.public_base_url))
    }
}
