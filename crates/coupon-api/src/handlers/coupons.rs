//! Coupon handlers
//!
//! Read-side endpoints over the coupon catalog.

use axum::{
    extract::{Path, State},
    Json,
};
use coupon_service::{CatalogService, CouponResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all coupons with their claimed state
///
/// GET /coupons
pub async fn list_coupons(State(state): State<AppState>) -> ApiResult<Json<Vec<CouponResponse>>> {
    let service = CatalogService::new(state.service_context());
    let coupons = service.list_coupons().await?;
    Ok(Json(coupons))
}

/// Get a single coupon by id
///
/// GET /coupons/{coupon_id}
pub async fn get_coupon(
    State(state): State<AppState>,
    Path(coupon_id): Path<String>,
) -> ApiResult<Json<CouponResponse>> {
    let coupon_id = coupon_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid coupon_id format"))?;

    let service = CatalogService::new(state.service_context());
    let coupon = service.get_coupon(coupon_id).await?;
    Ok(Json(coupon))
}
