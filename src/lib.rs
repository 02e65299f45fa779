//! # Property Catalog
//!
//! A small real-estate property catalog: a REST API over a MongoDB
//! collection, with listing images stored on the local filesystem and a
//! static single-page frontend served by the same process.
//!
//! ## Architecture Layers
//!
//! - **Domain**: the `Property` aggregate and its identifier
//! - **Application**: use cases and ports (interfaces)
//! - **Infrastructure**: MongoDB and filesystem adapters
//! - **API**: HTTP handlers, router, and middleware

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::{entities, value_objects};
