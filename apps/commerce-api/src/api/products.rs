//! Products API routes

use axum::{middleware, Router};
use axum_helpers::{require_admin, JwtAuth};
use domain_products::{handlers, MongoProductRepository, ProductService};
use media::{HttpMediaStore, Staging};

use crate::state::AppState;

/// Create the products router, guarded by admin authentication
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let media_store = HttpMediaStore::new(&state.config.media);
    let service = ProductService::new(repository, media_store);
    let staging = Staging::new(state.config.media.staging_dir.clone());

    let auth = JwtAuth::new(&state.config.jwt);

    handlers::router(service, staging).layer(middleware::from_fn_with_state(auth, require_admin))
}
