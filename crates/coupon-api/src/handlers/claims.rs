//! Claim handlers
//!
//! Endpoints for claiming coupons and inspecting claim state.

use axum::{
    extract::{Query, State},
    Json,
};
use coupon_core::ClaimerToken;
use coupon_service::dto::CooldownStatusQuery;
use coupon_service::{
    CatalogService, ClaimCouponRequest, ClaimOutcomeResponse, ClaimResponse, ClaimService,
    CooldownStatusResponse,
};

use crate::extractors::{ClientIp, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List claim records, newest first
///
/// GET /claims
pub async fn list_claims(State(state): State<AppState>) -> ApiResult<Json<Vec<ClaimResponse>>> {
    let service = CatalogService::new(state.service_context());
    let claims = service.list_claims().await?;
    Ok(Json(claims))
}

/// Report whether a claim is currently permitted
///
/// GET /claims/status
pub async fn cooldown_status(
    State(state): State<AppState>,
    Query(query): Query<CooldownStatusQuery>,
) -> ApiResult<Json<CooldownStatusResponse>> {
    let token = query
        .claimer_token
        .map(ClaimerToken::new)
        .transpose()
        .map_err(|e| ApiError::invalid_query(e.to_string()))?;

    let service = ClaimService::new(state.service_context());
    let status = service.cooldown_status(token.as_ref()).await?;
    Ok(Json(status))
}

/// Claim the oldest unclaimed coupon
///
/// POST /claims
pub async fn create_claim(
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    ValidatedJson(request): ValidatedJson<ClaimCouponRequest>,
) -> ApiResult<Created<Json<ClaimOutcomeResponse>>> {
    let service = ClaimService::new(state.service_context());
    let outcome = service.claim(request, ip_address).await?;
    Ok(Created(Json(outcome)))
}
