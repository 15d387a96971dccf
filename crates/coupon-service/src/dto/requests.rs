//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Claim coupon request
///
/// The claimer token is the opaque identifier the client generated and
/// persisted locally; its shape is validated here before the domain layer
/// wraps it in a `ClaimerToken`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClaimCouponRequest {
    #[validate(length(min = 8, max = 128, message = "Claimer token must be 8-128 characters"))]
    pub claimer_token: String,
}

/// Cooldown status query parameters
///
/// The token is optional: without it the status reflects the global scope
/// regardless of configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CooldownStatusQuery {
    pub claimer_token: Option<String>,
}
