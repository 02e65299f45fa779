use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for physical image storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the bytes under `folder` with a generated collision-resistant
    /// name that preserves the hint's extension. Creates the folder if
    /// absent. Returns the relative key `folder/generatedName`.
    async fn save(
        &self,
        bytes: Bytes,
        file_name_hint: &str,
        folder: &str,
    ) -> Result<String, StorageError>;

    /// Remove the file named by the trailing component of `reference` (a
    /// relative key or an absolute URL). Empty references and missing files
    /// are no-ops, never errors.
    async fn delete(&self, reference: &str, folder: &str) -> Result<(), StorageError>;
}
