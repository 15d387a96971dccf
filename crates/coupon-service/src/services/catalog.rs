//! Catalog service
//!
//! Read-side listings of coupons and claim records.

use tracing::{debug, instrument};

use coupon_core::error::DomainError;

use crate::dto::{ClaimResponse, CouponResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every coupon with its claimed state
    #[instrument(skip(self))]
    pub async fn list_coupons(&self) -> ServiceResult<Vec<CouponResponse>> {
        let coupons = self.ctx.coupon_repo().list().await?;
        debug!(count = coupons.len(), "Listed coupons");

        Ok(coupons.into_iter().map(CouponResponse::from).collect())
    }

    /// Get a single coupon by id
    #[instrument(skip(self))]
    pub async fn get_coupon(&self, id: uuid::Uuid) -> ServiceResult<CouponResponse> {
        let coupon = self
            .ctx
            .coupon_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CouponNotFound(id))?;

        Ok(coupon.into())
    }

    /// List claim records, newest first
    #[instrument(skip(self))]
    pub async fn list_claims(&self) -> ServiceResult<Vec<ClaimResponse>> {
        let claims = self.ctx.claim_repo().list().await?;
        debug!(count = claims.len(), "Listed claims");

        Ok(claims.into_iter().map(ClaimResponse::from).collect())
    }
}
