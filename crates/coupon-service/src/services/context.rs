//! Service context - dependency container for services
//!
//! Holds the repositories and policy configuration needed by services.

use std::sync::Arc;

use coupon_core::traits::{ClaimRepository, CouponRepository};
use coupon_core::value_objects::CooldownPolicy;
use coupon_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    coupon_repo: Arc<dyn CouponRepository>,
    claim_repo: Arc<dyn ClaimRepository>,

    // Policy
    cooldown: CooldownPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        coupon_repo: Arc<dyn CouponRepository>,
        claim_repo: Arc<dyn ClaimRepository>,
        cooldown: CooldownPolicy,
    ) -> Self {
        Self {
            pool,
            coupon_repo,
            claim_repo,
            cooldown,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the coupon repository
    pub fn coupon_repo(&self) -> &dyn CouponRepository {
        self.coupon_repo.as_ref()
    }

    /// Get the claim repository
    pub fn claim_repo(&self) -> &dyn ClaimRepository {
        self.claim_repo.as_ref()
    }

    /// Get the cooldown policy
    pub fn cooldown(&self) -> &CooldownPolicy {
        &self.cooldown
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("cooldown", &self.cooldown)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    coupon_repo: Option<Arc<dyn CouponRepository>>,
    claim_repo: Option<Arc<dyn ClaimRepository>>,
    cooldown: Option<CooldownPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            coupon_repo: None,
            claim_repo: None,
            cooldown: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn coupon_repo(mut self, repo: Arc<dyn CouponRepository>) -> Self {
        self.coupon_repo = Some(repo);
        self
    }

    pub fn claim_repo(mut self, repo: Arc<dyn ClaimRepository>) -> Self {
        self.claim_repo = Some(repo);
        self
    }

    pub fn cooldown(mut self, policy: CooldownPolicy) -> Self {
        self.cooldown = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.coupon_repo
                .ok_or_else(|| super::error::ServiceError::validation("coupon_repo is required"))?,
            self.claim_repo
                .ok_or_else(|| super::error::ServiceError::validation("claim_repo is required"))?,
            self.cooldown.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
