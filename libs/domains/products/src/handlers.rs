//! HTTP handlers for the products API

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{errors::ErrorResponse, UuidPath};
use media::{MediaStore, Staging};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ProductResult;
use crate::form::ProductFormData;
use crate::models::{Gender, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Largest accepted multipart body (all parts combined)
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        fetch_all_products,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, Gender, ProductResponse, ProductListResponse,
            MessageResponse, CreateProductForm, UpdateProductForm,
            ErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Response envelope carrying a single product
#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// Response envelope carrying the product list
#[derive(Serialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

/// Response envelope carrying a confirmation message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Multipart form for creating a product (documentation schema)
#[derive(ToSchema)]
pub struct CreateProductForm {
    pub name: String,
    pub brand: String,
    pub description: String,
    /// Comma-delimited color list, e.g. "red,blue"
    pub colors: String,
    /// Comma-delimited size list, e.g. "S,M"
    pub sizes: String,
    pub gender: Gender,
    pub price: String,
    pub category: String,
    pub stock: String,
    /// One or more image files (required)
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<String>,
}

/// Multipart form for updating a product (documentation schema)
#[derive(ToSchema)]
pub struct UpdateProductForm {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub colors: String,
    pub sizes: String,
    pub gender: Gender,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub sold_count: String,
    pub rating: String,
    /// Replacement image files; omit to keep the current images
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<String>,
}

/// Shared state for the products routes
pub struct ProductsState<R: ProductRepository, M: MediaStore> {
    pub service: ProductService<R, M>,
    pub staging: Staging,
}

/// Create the products router with all HTTP endpoints
pub fn router<R, M>(service: ProductService<R, M>, staging: Staging) -> Router
where
    R: ProductRepository + 'static,
    M: MediaStore + 'static,
{
    let state = Arc::new(ProductsState { service, staging });

    Router::new()
        .route("/create", post(create_product))
        .route("/fetch-all", get(fetch_all_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Create a new product with attached images
#[utoipa::path(
    post,
    path = "/create",
    tag = "Products",
    request_body(content = CreateProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Missing files or invalid fields", body = ErrorResponse),
        (status = 500, description = "Upload or persistence failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository, M: MediaStore>(
    State(state): State<Arc<ProductsState<R, M>>>,
    mut multipart: Multipart,
) -> ProductResult<impl IntoResponse> {
    let form = ProductFormData::from_multipart(&mut multipart, &state.staging).await?;
    let (submission, files) = form.into_submission()?;

    let product = state.service.create_product(submission, files).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            product,
        }),
    ))
}

/// List all products
#[utoipa::path(
    get,
    path = "/fetch-all",
    tag = "Products",
    responses(
        (status = 200, description = "Unfiltered product list", body = ProductListResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn fetch_all_products<R: ProductRepository, M: MediaStore>(
    State(state): State<Arc<ProductsState<R, M>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let products = state.service.fetch_all_products().await?;
    Ok(Json(ProductListResponse {
        success: true,
        products,
    }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No product with this ID", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository, M: MediaStore>(
    State(state): State<Arc<ProductsState<R, M>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = state.service.get_product(id).await?;
    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Overwrite a product, optionally replacing its images
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content = UpdateProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 404, description = "No product with this ID", body = ErrorResponse),
        (status = 500, description = "Upload or persistence failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository, M: MediaStore>(
    State(state): State<Arc<ProductsState<R, M>>>,
    UuidPath(id): UuidPath,
    mut multipart: Multipart,
) -> ProductResult<Json<ProductResponse>> {
    let form = ProductFormData::from_multipart(&mut multipart, &state.staging).await?;
    let (revision, files) = form.into_revision()?;

    let product = state.service.update_product(id, revision, files).await?;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "No product with this ID", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository, M: MediaStore>(
    State(state): State<Arc<ProductsState<R, M>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<MessageResponse>> {
    state.service.delete_product(id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Product deleted successfully".to_string(),
    }))
}
