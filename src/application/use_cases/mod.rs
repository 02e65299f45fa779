mod create_property;
mod delete_property;
mod get_property;
mod list_properties;

/// Fixed folder under the media root that holds uploaded property images.
pub const IMAGE_FOLDER: &str = "images";

pub use create_property::{CreateError, CreatePropertyUseCase};
pub use delete_property::{DeleteError, DeletePropertyUseCase};
pub use get_property::{GetError, GetPropertyUseCase};
pub use list_properties::{ListError, ListPropertiesUseCase};
