use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{ImageStore, StorageError};

/// Local filesystem image store rooted at the public media directory.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the media root if absent.
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder)
    }
}

/// Generate a collision-resistant file name, preserving the hint's extension.
fn generate_file_name(file_name_hint: &str) -> String {
    match Path::new(file_name_hint)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

/// Trailing path component of a key or URL; the only part delete trusts.
fn file_name_component(reference: &str) -> Option<&str> {
    reference
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(
        &self,
        bytes: Bytes,
        file_name_hint: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        let generated = generate_file_name(file_name_hint);
        let dir = self.folder_path(folder);
        fs::create_dir_all(&dir).await?;

        let path = dir.join(&generated);
        debug!("Writing image to {:?}", path);
        fs::write(&path, &bytes).await?;

        Ok(format!("{}/{}", folder, generated))
    }

    async fn delete(&self, reference: &str, folder: &str) -> Result<(), StorageError> {
        let Some(name) = file_name_component(reference) else {
            return Ok(());
        };

        let path = self.folder_path(folder).join(name);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
