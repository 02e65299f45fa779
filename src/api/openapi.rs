use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::create::CreatePropertyForm;
use crate::application::dto::PropertyDto;

/// OpenAPI specification for the Property Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property Catalog API",
        version = "1.0.0",
        description = "Real-estate property catalog: list, filter, create with image upload, delete"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::get::get_handler,
        crate::api::handlers::create::create_handler,
        crate::api::handlers::delete::delete_handler,
    ),
    components(
        schemas(
            PropertyDto,
            CreatePropertyForm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "properties", description = "Property catalog operations")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
