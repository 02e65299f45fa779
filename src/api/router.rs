use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use mongodb::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, readiness_handler,
};
use crate::api::middleware::cors::create_cors_layer;
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase, ListPropertiesUseCase,
};

/// Application state container
pub struct AppState {
    pub database: Database,
    pub list_use_case: Arc<ListPropertiesUseCase>,
    pub get_use_case: Arc<GetPropertyUseCase>,
    pub create_use_case: Arc<CreatePropertyUseCase>,
    pub delete_use_case: Arc<DeletePropertyUseCase>,
    /// Directory holding uploaded media; its `images` folder is served at
    /// `/images`.
    pub media_root: PathBuf,
    /// Directory holding the single-page frontend assets, served as the
    /// router fallback.
    pub static_root: PathBuf,
    pub max_upload_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(state.database.clone()),
        )
        // Property API
        .route(
            "/api/properties",
            get(list_handler).with_state(Arc::clone(&state.list_use_case)),
        )
        .route(
            "/api/properties",
            post(create_handler).with_state(Arc::clone(&state.create_use_case)),
        )
        .route(
            "/api/properties/{id}",
            get(get_handler).with_state(Arc::clone(&state.get_use_case)),
        )
        .route(
            "/api/properties/{id}",
            delete(delete_handler).with_state(Arc::clone(&state.delete_use_case)),
        )
        // API documentation
        .merge(swagger_ui())
        // Uploaded images, public under /images/{generatedName}
        .nest_service("/images", ServeDir::new(state.media_root.join("images")))
        // Single-page frontend
        .fallback_service(ServeDir::new(&state.static_root))
        .layer(create_cors_layer())
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
}
