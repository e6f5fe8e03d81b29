//! Coupons API routes

use axum::{middleware, Router};
use axum_helpers::{require_super_admin, JwtAuth};
use domain_coupons::{handlers, CouponService, MongoCouponRepository};

use crate::state::AppState;

/// Create the coupons router, guarded by super-admin authentication
pub fn router(state: &AppState) -> Router {
    let repository = MongoCouponRepository::new(&state.db);
    let service = CouponService::new(repository);

    let auth = JwtAuth::new(&state.config.jwt);

    handlers::router(service).layer(middleware::from_fn_with_state(auth, require_super_admin))
}

/// Initialize coupon indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoCouponRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
