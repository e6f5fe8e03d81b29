use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Coupon entity - represents a discount coupon stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Coupon {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Unique redemption code, stored uppercase
    pub code: String,
    /// Discount as a percentage in (0, 100]
    pub discount_percent: f64,
    /// First instant the coupon is valid
    pub start_date: DateTime<Utc>,
    /// Last instant the coupon is valid
    pub end_date: DateTime<Utc>,
    /// Maximum number of redemptions
    pub usage_limit: i32,
    /// Redemptions so far
    #[serde(default)]
    pub usage_count: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new coupon
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCoupon {
    /// Redemption code; normalized to uppercase on creation
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(range(min = 0.01, max = 100.0))]
    pub discount_percent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub usage_limit: i32,
}

impl Coupon {
    /// Create a new coupon from a validated DTO.
    ///
    /// The id is assigned here; the code is uppercased and the usage count
    /// starts at zero.
    pub fn new(input: CreateCoupon) -> Self {
        Self {
            id: Uuid::now_v7(),
            code: input.code.trim().to_uppercase(),
            discount_percent: input.discount_percent,
            start_date: input.start_date,
            end_date: input.end_date,
            usage_limit: input.usage_limit,
            usage_count: 0,
            created_at: Utc::now(),
        }
    }
}
