mod image_store;
mod property_repository;

pub use image_store::{ImageStore, StorageError};
pub use property_repository::{PropertyRepository, RepositoryError};

#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use property_repository::MockPropertyRepository;
