//! Server infrastructure module.
//!
//! Provides application setup with OpenAPI documentation, health endpoints,
//! and graceful shutdown.

mod app;
mod health;
mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
