//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Claim, Coupon};
use crate::error::DomainError;
use crate::value_objects::{ClaimerToken, CooldownPolicy};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Coupon Repository
// ============================================================================

#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Find coupon by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Coupon>>;

    /// Find coupon by code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Coupon>>;

    /// List all coupons ordered by creation time ascending
    async fn list(&self) -> RepoResult<Vec<Coupon>>;

    /// Count unclaimed coupons
    async fn available_count(&self) -> RepoResult<i64>;

    /// Insert a coupon; skipped silently if the code is already present.
    /// Returns true if a row was inserted.
    async fn create_if_absent(&self, coupon: &Coupon) -> RepoResult<bool>;

    /// Atomically claim the oldest unclaimed coupon and record the claim.
    ///
    /// Marks the coupon claimed and inserts the claim row in a single
    /// transaction: either both land or neither does. The cooldown is
    /// enforced inside the same transaction, so two concurrent claimants
    /// within one window cannot both land a claim. Returns
    /// `DomainError::CooldownActive` while the window is open and
    /// `DomainError::NoCouponsAvailable` when every coupon is claimed.
    async fn claim_next_available(
        &self,
        claimer_token: &ClaimerToken,
        ip_address: Option<&str>,
        cooldown: CooldownPolicy,
    ) -> RepoResult<(Coupon, Claim)>;
}

// ============================================================================
// Claim Repository
// ============================================================================

#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// List all claims, newest first
    async fn list(&self) -> RepoResult<Vec<Claim>>;

    /// Most recent claim by any claimer
    async fn find_latest(&self) -> RepoResult<Option<Claim>>;

    /// Most recent claim by a specific claimer token
    async fn find_latest_by_claimer(&self, token: &ClaimerToken) -> RepoResult<Option<Claim>>;

    /// Claims referencing a coupon (at most one under the store constraint)
    async fn find_by_coupon(&self, coupon_id: Uuid) -> RepoResult<Vec<Claim>>;
}
