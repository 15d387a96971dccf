//! Coupon entity - a promotional discount code claimable at most once

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Coupon entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    /// Create a new unclaimed coupon
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            description: description.into(),
            claimed: false,
            created_at: Utc::now(),
        }
    }

    /// Check if the coupon is still available for claiming
    pub fn is_available(&self) -> bool {
        !self.claimed
    }

    /// Mark the coupon as claimed.
    ///
    /// The claimed flag only ever transitions false -> true; claiming an
    /// already-claimed coupon is a domain rule violation handled at the
    /// repository level, so this stays infallible for fresh coupons.
    pub fn mark_claimed(&mut self) {
        self.claimed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coupon_is_available() {
        let coupon = Coupon::new("SAVE10", "10% off your first order");
        assert!(coupon.is_available());
        assert!(!coupon.claimed);
        assert_eq!(coupon.code, "SAVE10");
    }

    #[test]
    fn test_mark_claimed() {
        let mut coupon = Coupon::new("SAVE10", "10% off your first order");
        coupon.mark_claimed();
        assert!(coupon.claimed);
        assert!(!coupon.is_available());
    }

    #[test]
    fn test_unique_ids() {
        let a = Coupon::new("A", "first");
        let b = Coupon::new("B", "second");
        assert_ne!(a.id, b.id);
    }
}
