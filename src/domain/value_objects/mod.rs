mod property_id;

pub use property_id::PropertyId;
