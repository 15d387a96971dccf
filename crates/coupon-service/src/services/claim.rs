//! Claim service
//!
//! Enforces the claim cooldown and orchestrates the atomic claim operation.

use chrono::Utc;
use tracing::{info, instrument, warn};

use coupon_core::error::DomainError;
use coupon_core::value_objects::{ClaimerToken, CooldownScope};

use crate::dto::{ClaimCouponRequest, ClaimOutcomeResponse, CooldownStatusResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Claim service
pub struct ClaimService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClaimService<'a> {
    /// Create a new ClaimService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Report whether a claim is currently permitted
    ///
    /// With per-claimer scope and no token supplied, the status degrades to
    /// the global view so anonymous pageloads still get a usable countdown.
    #[instrument(skip(self, claimer_token))]
    pub async fn cooldown_status(
        &self,
        claimer_token: Option<&ClaimerToken>,
    ) -> ServiceResult<CooldownStatusResponse> {
        let policy = *self.ctx.cooldown();
        let latest = self.latest_relevant_claim(claimer_token).await?;

        Ok(match latest {
            Some(claim) => {
                let remaining = policy.remaining_seconds(claim.created_at, Utc::now());
                if remaining > 0 {
                    CooldownStatusResponse::cooling_down(
                        policy.seconds,
                        remaining,
                        policy.scope,
                        claim.created_at,
                    )
                } else {
                    CooldownStatusResponse::eligible(
                        policy.seconds,
                        policy.scope,
                        Some(claim.created_at),
                    )
                }
            }
            None => CooldownStatusResponse::eligible(policy.seconds, policy.scope, None),
        })
    }

    /// Claim the oldest unclaimed coupon for the given claimer
    ///
    /// Refuses with `COOLDOWN_ACTIVE` while the cooldown window is open and
    /// with `NO_COUPONS_AVAILABLE` once every coupon is claimed. The coupon
    /// update and the claim insert are a single transaction in the
    /// repository, which re-checks the cooldown under a scope-keyed lock, so
    /// no partial state can persist and concurrent claimants cannot slip
    /// through the window together.
    #[instrument(skip(self, request))]
    pub async fn claim(
        &self,
        request: ClaimCouponRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<ClaimOutcomeResponse> {
        let token = ClaimerToken::new(request.claimer_token).map_err(DomainError::from)?;

        // Fast-path refusal before opening a transaction; the repository
        // remains the authoritative check.
        let policy = *self.ctx.cooldown();
        if let Some(latest) = self.latest_relevant_claim(Some(&token)).await? {
            let remaining = policy.remaining_seconds(latest.created_at, Utc::now());
            if remaining > 0 {
                return Err(DomainError::CooldownActive {
                    remaining_seconds: remaining,
                }
                .into());
            }
        }

        let (coupon, claim) = self
            .ctx
            .coupon_repo()
            .claim_next_available(&token, ip_address.as_deref(), policy)
            .await?;

        info!(
            coupon_id = %coupon.id,
            code = %coupon.code,
            claim_id = %claim.id,
            "Coupon claimed"
        );

        Ok(ClaimOutcomeResponse::new(coupon, claim))
    }

    /// The most recent claim counted by the configured cooldown scope
    async fn latest_relevant_claim(
        &self,
        claimer_token: Option<&ClaimerToken>,
    ) -> ServiceResult<Option<coupon_core::entities::Claim>> {
        let claim = match (self.ctx.cooldown().scope, claimer_token) {
            (CooldownScope::PerClaimer, Some(token)) => {
                self.ctx.claim_repo().find_latest_by_claimer(token).await?
            }
            (CooldownScope::PerClaimer, None) => {
                // No token to scope by; fall back to the global view
                warn!("Per-claimer cooldown status requested without a token, using global scope");
                self.ctx.claim_repo().find_latest().await?
            }
            (CooldownScope::Global, _) => self.ctx.claim_repo().find_latest().await?,
        };

        Ok(claim)
    }
}
