//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use coupon_core::entities::{Claim, Coupon};
use coupon_core::value_objects::CooldownScope;

// ============================================================================
// Coupon Responses
// ============================================================================

/// Single coupon response
#[derive(Debug, Clone, Serialize)]
pub struct CouponResponse {
    pub id: String,
    pub code: String,
    pub description: String,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id.to_string(),
            code: coupon.code,
            description: coupon.description,
            claimed: coupon.claimed,
            created_at: coupon.created_at,
        }
    }
}

// ============================================================================
// Claim Responses
// ============================================================================

/// Single claim record response
#[derive(Debug, Clone, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub coupon_id: String,
    pub claimer_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            coupon_id: claim.coupon_id.to_string(),
            claimer_token: claim.claimer_token.into_inner(),
            ip_address: claim.ip_address,
            created_at: claim.created_at,
        }
    }
}

/// Successful claim outcome: the coupon that was claimed plus the claim record
#[derive(Debug, Serialize)]
pub struct ClaimOutcomeResponse {
    pub coupon: CouponResponse,
    pub claim: ClaimResponse,
}

impl ClaimOutcomeResponse {
    pub fn new(coupon: Coupon, claim: Claim) -> Self {
        Self {
            coupon: coupon.into(),
            claim: claim.into(),
        }
    }
}

// ============================================================================
// Cooldown Responses
// ============================================================================

/// Cooldown status response
///
/// `remaining_seconds` is zero when claiming is permitted; clients render a
/// countdown from it.
#[derive(Debug, Serialize)]
pub struct CooldownStatusResponse {
    pub eligible: bool,
    pub cooldown_seconds: i64,
    pub remaining_seconds: i64,
    pub scope: CooldownScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_claim_at: Option<DateTime<Utc>>,
}

impl CooldownStatusResponse {
    /// Status when claiming is permitted
    pub fn eligible(cooldown_seconds: i64, scope: CooldownScope, last_claim_at: Option<DateTime<Utc>>) -> Self {
        Self {
            eligible: true,
            cooldown_seconds,
            remaining_seconds: 0,
            scope,
            last_claim_at,
        }
    }

    /// Status while the cooldown is active
    pub fn cooling_down(
        cooldown_seconds: i64,
        remaining_seconds: i64,
        scope: CooldownScope,
        last_claim_at: DateTime<Utc>,
    ) -> Self {
        Self {
            eligible: false,
            cooldown_seconds,
            remaining_seconds,
            scope,
            last_claim_at: Some(last_claim_at),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
