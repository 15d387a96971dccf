//! Coupon entity <-> model mapper

use coupon_core::entities::Coupon;

use crate::models::CouponModel;

impl From<CouponModel> for Coupon {
    fn from(model: CouponModel) -> Self {
        Coupon {
            id: model.id,
            code: model.code,
            description: model.description,
            claimed: model.claimed,
            created_at: model.created_at,
        }
    }
}
