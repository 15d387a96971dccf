//! Claim entity - a record of one successful coupon acquisition

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ClaimerToken;

/// Claim entity
///
/// Records which coupon was claimed, by which claimer token, and when.
/// Claims are append-only: never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub id: Uuid,
    pub coupon_id: Uuid,
    pub claimer_token: ClaimerToken,
    /// Populated only when an upstream proxy supplies a client address.
    /// The original browser client always sent a placeholder here.
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Create a new claim for a coupon
    pub fn new(coupon_id: Uuid, claimer_token: ClaimerToken) -> Self {
        Self {
            id: Uuid::new_v4(),
            coupon_id,
            claimer_token,
            ip_address: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the originating client address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Seconds elapsed since this claim was recorded (clamped at zero)
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds().max(0)
    }
}
