//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product management API with paginated listing",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:80", description = "Local development server")
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for Products API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}
