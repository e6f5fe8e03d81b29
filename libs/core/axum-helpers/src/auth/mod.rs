//! JWT authentication with role guards.
//!
//! Tokens are stateless HS256 bearer tokens; the claims carry an
//! [`AdminRole`] that the route-level guards check.

mod config;
mod jwt;
mod middleware;

pub use config::JwtConfig;
pub use jwt::{AdminRole, JwtAuth, JwtClaims, ACCESS_TOKEN_TTL};
pub use middleware::{require_admin, require_super_admin};
