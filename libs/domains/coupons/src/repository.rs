use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CouponResult;
use crate::models::{Coupon, CreateCoupon};

/// Repository trait for Coupon persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Create a new coupon
    async fn create(&self, input: CreateCoupon) -> CouponResult<Coupon>;

    /// Get a coupon by ID
    async fn find_by_id(&self, id: Uuid) -> CouponResult<Option<Coupon>>;

    /// List all coupons, unfiltered and unpaginated
    async fn find_all(&self) -> CouponResult<Vec<Coupon>>;

    /// Delete a coupon by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> CouponResult<bool>;

    /// Check whether a coupon code is already taken
    async fn exists_by_code(&self, code: &str) -> CouponResult<bool>;
}
