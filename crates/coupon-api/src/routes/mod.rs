//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{claims, coupons, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(coupon_routes()).merge(claim_routes())
}

/// Coupon routes
fn coupon_routes() -> Router<AppState> {
    Router::new()
        .route("/coupons", get(coupons::list_coupons))
        .route("/coupons/:coupon_id", get(coupons::get_coupon))
}

/// Claim routes
fn claim_routes() -> Router<AppState> {
    Router::new()
        .route("/claims", get(claims::list_claims))
        .route("/claims", post(claims::create_claim))
        .route("/claims/status", get(claims::cooldown_status))
}
