//! Coupon database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the coupons table
#[derive(Debug, Clone, FromRow)]
pub struct CouponModel {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

impl CouponModel {
    /// Check if the coupon is still claimable
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.claimed
    }
}
