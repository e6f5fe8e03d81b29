//! MongoDB implementation of CouponRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CouponResult;
use crate::models::{Coupon, CreateCoupon};
use crate::repository::CouponRepository;

/// MongoDB implementation of the CouponRepository
pub struct MongoCouponRepository {
    collection: Collection<Coupon>,
}

impl MongoCouponRepository {
    /// Create a new MongoCouponRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Coupon>("coupons");
        Self { collection }
    }

    /// Initialize indexes
    pub async fn init_indexes(&self) -> CouponResult<()> {
        let indexes = vec![IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_code_unique".to_string())
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Coupon indexes created successfully");
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl CouponRepository for MongoCouponRepository {
    #[instrument(skip(self, input), fields(coupon_code = %input.code))]
    async fn create(&self, input: CreateCoupon) -> CouponResult<Coupon> {
        let coupon = Coupon::new(input);

        self.collection.insert_one(&coupon).await?;

        tracing::info!(coupon_id = %coupon.id, "Coupon created successfully");
        Ok(coupon)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CouponResult<Option<Coupon>> {
        let coupon = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(coupon)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> CouponResult<Vec<Coupon>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let coupons: Vec<Coupon> = cursor.try_collect().await?;

        Ok(coupons)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CouponResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(coupon_id = %id, "Coupon deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists_by_code(&self, code: &str) -> CouponResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "code": code })
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_serializes_uuid_as_string() {
        let id = Uuid::now_v7();
        let filter = MongoCouponRepository::id_filter(id);
        assert_eq!(filter.get_str("_id").unwrap(), id.to_string());
    }
}
