//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique claimer token, shaped like the browser-generated ones
pub fn unique_claimer_token() -> String {
    format!("it-claimer-{:016x}", unique_suffix().wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Claim request
#[derive(Debug, Serialize)]
pub struct ClaimRequest {
    pub claimer_token: String,
}

impl ClaimRequest {
    pub fn unique() -> Self {
        Self {
            claimer_token: unique_claimer_token(),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            claimer_token: token.to_string(),
        }
    }
}

/// Coupon response
#[derive(Debug, Deserialize)]
pub struct CouponResponse {
    pub id: String,
    pub code: String,
    pub description: String,
    pub claimed: bool,
    pub created_at: String,
}

/// Claim record response
#[derive(Debug, Deserialize)]
pub struct ClaimResponse {
    pub id: String,
    pub coupon_id: String,
    pub claimer_token: String,
    pub ip_address: Option<String>,
    pub created_at: String,
}

/// Successful claim outcome
#[derive(Debug, Deserialize)]
pub struct ClaimOutcomeResponse {
    pub coupon: CouponResponse,
    pub claim: ClaimResponse,
}

/// Cooldown status response
#[derive(Debug, Deserialize)]
pub struct CooldownStatusResponse {
    pub eligible: bool,
    pub cooldown_seconds: i64,
    pub remaining_seconds: i64,
    pub scope: String,
    pub last_claim_at: Option<String>,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
