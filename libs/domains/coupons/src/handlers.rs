//! HTTP handlers for the coupons API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use axum_helpers::{errors::ErrorResponse, UuidPath, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::CouponResult;
use crate::models::{Coupon, CreateCoupon};
use crate::repository::CouponRepository;
use crate::service::CouponService;

/// OpenAPI documentation for the coupons API
#[derive(OpenApi)]
#[openapi(
    paths(create_coupon, fetch_all_coupons, delete_coupon),
    components(
        schemas(Coupon, CreateCoupon, CouponResponse, CouponListResponse, MessageResponse, ErrorResponse)
    ),
    tags(
        (name = "Coupons", description = "Coupon management endpoints (super admin only)")
    )
)]
pub struct ApiDoc;

/// Response envelope carrying a single coupon
#[derive(Serialize, ToSchema)]
pub struct CouponResponse {
    pub success: bool,
    pub coupon: Coupon,
}

/// Response envelope carrying the coupon list
#[derive(Serialize, ToSchema)]
pub struct CouponListResponse {
    pub success: bool,
    pub coupons: Vec<Coupon>,
}

/// Response envelope carrying a confirmation message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Create the coupons router with all HTTP endpoints
pub fn router<R: CouponRepository + 'static>(service: CouponService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/create-coupons", post(create_coupon))
        .route("/fetch-all-coupons", get(fetch_all_coupons))
        .route("/{id}", delete(delete_coupon))
        .with_state(shared_service)
}

/// Create a new coupon
#[utoipa::path(
    post,
    path = "/create-coupons",
    tag = "Coupons",
    request_body = CreateCoupon,
    responses(
        (status = 201, description = "Coupon created successfully", body = CouponResponse),
        (status = 400, description = "Invalid coupon payload", body = ErrorResponse),
        (status = 409, description = "Code already exists", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn create_coupon<R: CouponRepository>(
    State(service): State<Arc<CouponService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCoupon>,
) -> CouponResult<impl IntoResponse> {
    let coupon = service.create_coupon(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CouponResponse {
            success: true,
            coupon,
        }),
    ))
}

/// List all coupons
#[utoipa::path(
    get,
    path = "/fetch-all-coupons",
    tag = "Coupons",
    responses(
        (status = 200, description = "Unfiltered coupon list", body = CouponListResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn fetch_all_coupons<R: CouponRepository>(
    State(service): State<Arc<CouponService<R>>>,
) -> CouponResult<Json<CouponListResponse>> {
    let coupons = service.fetch_all_coupons().await?;
    Ok(Json(CouponListResponse {
        success: true,
        coupons,
    }))
}

/// Delete a coupon
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Coupons",
    params(
        ("id" = Uuid, Path, description = "Coupon ID")
    ),
    responses(
        (status = 200, description = "Coupon deleted", body = MessageResponse),
        (status = 404, description = "No coupon with this ID", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn delete_coupon<R: CouponRepository>(
    State(service): State<Arc<CouponService<R>>>,
    UuidPath(id): UuidPath,
) -> CouponResult<Json<MessageResponse>> {
    service.delete_coupon(id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Coupon deleted successfully".to_string(),
    }))
}
