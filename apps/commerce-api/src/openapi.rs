//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the commerce API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce API",
        version = "0.1.0",
        description = "E-commerce backend: product catalog with image uploads, plus coupons",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/coupons", api = domain_coupons::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Coupons", description = "Coupon management endpoints")
    )
)]
pub struct ApiDoc;
