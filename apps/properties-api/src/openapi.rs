//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Properties API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Real Estate API",
        version = "0.1.0",
        description = "API for managing real estate properties",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/properties", api = domain_properties::ApiDoc)
    ),
    tags(
        (name = "Properties", description = "Read-only property listing endpoints")
    )
)]
pub struct ApiDoc;
