use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::PropertyFilter;
use crate::domain::entities::Property;
use crate::domain::value_objects::PropertyId;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for property persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List properties matching the filter. String filters match
    /// case-insensitively as substring/pattern, price bounds are inclusive,
    /// and filters combine with AND. An empty filter returns all records.
    async fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, RepositoryError>;

    /// Find a property by its exact id.
    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError>;

    /// Insert a property whose id is unset; returns the store-assigned id.
    async fn insert(&self, property: &Property) -> Result<PropertyId, RepositoryError>;

    /// Delete by id; returns whether a record existed and was removed.
    async fn delete(&self, id: &PropertyId) -> Result<bool, RepositoryError>;

    /// Exact, case-sensitive equality on both fields.
    async fn exists_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<bool, RepositoryError>;
}
