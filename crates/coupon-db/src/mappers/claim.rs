//! Claim entity <-> model mapper

use coupon_core::entities::Claim;
use coupon_core::error::DomainError;
use coupon_core::value_objects::ClaimerToken;

use crate::models::ClaimModel;

impl TryFrom<ClaimModel> for Claim {
    type Error = DomainError;

    fn try_from(model: ClaimModel) -> Result<Self, Self::Error> {
        Ok(Claim {
            id: model.id,
            coupon_id: model.coupon_id,
            claimer_token: ClaimerToken::new(model.claimer_token)?,
            ip_address: model.ip_address,
            created_at: model.created_at,
        })
    }
}
