use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Fully-open CORS policy.
///
/// The catalog serves an unauthenticated public API and its own frontend;
/// any origin may call it. Credentials stay disabled, which is what makes
/// the wildcard origin acceptable.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
}
