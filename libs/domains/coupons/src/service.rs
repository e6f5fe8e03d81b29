//! Coupon Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CouponError, CouponResult};
use crate::models::{Coupon, CreateCoupon};
use crate::repository::CouponRepository;

/// Coupon service providing business logic operations
pub struct CouponService<R: CouponRepository> {
    repository: Arc<R>,
}

impl<R: CouponRepository> CouponService<R> {
    /// Create a new CouponService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new coupon
    #[instrument(skip(self, input), fields(coupon_code = %input.code))]
    pub async fn create_coupon(&self, input: CreateCoupon) -> CouponResult<Coupon> {
        input
            .validate()
            .map_err(|e| CouponError::Validation(e.to_string()))?;

        if input.end_date <= input.start_date {
            return Err(CouponError::Validation(
                "end_date must be after start_date".to_string(),
            ));
        }

        let code = input.code.trim().to_uppercase();
        if self.repository.exists_by_code(&code).await? {
            return Err(CouponError::DuplicateCode(code));
        }

        self.repository.create(input).await
    }

    /// List all coupons, unfiltered and unpaginated
    #[instrument(skip(self))]
    pub async fn fetch_all_coupons(&self) -> CouponResult<Vec<Coupon>> {
        self.repository.find_all().await
    }

    /// Delete a coupon
    #[instrument(skip(self))]
    pub async fn delete_coupon(&self, id: Uuid) -> CouponResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CouponError::NotFound(id));
        }

        if !self.repository.delete(id).await? {
            return Err(CouponError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: CouponRepository> Clone for CouponService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCouponRepository;
    use chrono::{Duration, Utc};

    fn create_coupon() -> CreateCoupon {
        CreateCoupon {
            code: "save10".to_string(),
            discount_percent: 10.0,
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::days(30),
            usage_limit: 100,
        }
    }

    #[tokio::test]
    async fn test_create_coupon_checks_uppercased_code() {
        let mut repo = MockCouponRepository::new();
        repo.expect_exists_by_code()
            .with(mockall::predicate::eq("SAVE10"))
            .returning(|_| Ok(false));
        repo.expect_create().returning(|input| Ok(Coupon::new(input)));

        let service = CouponService::new(repo);
        let coupon = service.create_coupon(create_coupon()).await.unwrap();

        assert_eq!(coupon.code, "SAVE10");
    }

    #[tokio::test]
    async fn test_create_coupon_rejects_duplicate_code() {
        let mut repo = MockCouponRepository::new();
        repo.expect_exists_by_code().returning(|_| Ok(true));
        repo.expect_create().never();

        let service = CouponService::new(repo);
        let err = service.create_coupon(create_coupon()).await.unwrap_err();

        assert!(matches!(err, CouponError::DuplicateCode(_)));
    }

    #[tokio::test]
    async fn test_create_coupon_rejects_inverted_dates() {
        let mut repo = MockCouponRepository::new();
        repo.expect_create().never();

        let mut input = create_coupon();
        input.end_date = input.start_date - Duration::days(1);

        let service = CouponService::new(repo);
        let err = service.create_coupon(input).await.unwrap_err();

        assert!(matches!(err, CouponError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_coupon_is_404() {
        let mut repo = MockCouponRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = CouponService::new(repo);
        let err = service.delete_coupon(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, CouponError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_coupon() {
        let coupon = Coupon::new(create_coupon());
        let id = coupon.id;

        let mut repo = MockCouponRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(coupon.clone())));
        repo.expect_delete()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(true));

        let service = CouponService::new(repo);
        assert!(service.delete_coupon(id).await.is_ok());
    }
}
