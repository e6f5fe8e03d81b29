//! Coupons Domain
//!
//! Discount coupon management backed by MongoDB, layered the same way as
//! the products domain: handlers over a service over a repository trait.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CouponError, CouponResult};
pub use handlers::ApiDoc;
pub use models::{Coupon, CreateCoupon};
pub use mongodb::MongoCouponRepository;
pub use repository::CouponRepository;
pub use service::CouponService;
