//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT authentication with role guards
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//! - **[`errors`]**: Envelope error responses (`{success: false, error}`)
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{
    require_admin, require_super_admin, AdminRole, JwtAuth, JwtClaims, JwtConfig,
    ACCESS_TOKEN_TTL,
};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
