//! Claim database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the claims table
#[derive(Debug, Clone, FromRow)]
pub struct ClaimModel {
    pub id: Uuid,
    pub coupon_id: Uuid,
    pub claimer_token: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}
