//! End-to-end API tests
//!
//! These tests require a running PostgreSQL instance and the
//! `DATABASE_URL` environment variable. They are skipped otherwise.

use anyhow::Result;
use reqwest::StatusCode;

use coupon_core::CooldownScope;
use integration_tests::{
    assert_json, assert_status, check_test_env, db_guard, reset_claim_state, test_config,
    ClaimOutcomeResponse, ClaimRequest, ClaimResponse, CooldownStatusResponse, CouponResponse,
    ErrorResponse, HealthResponse, TestServer,
};

#[tokio::test]
async fn test_health_endpoints() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let server = TestServer::start().await?;

    let response = server.get("/health").await?;
    let health: HealthResponse = assert_json(response, StatusCode::OK).await?;
    assert_eq!(health.status, "ok");

    let response = server.get("/health/ready").await?;
    assert_status(response, StatusCode::OK).await?;

    Ok(())
}

#[tokio::test]
async fn test_seeded_coupon_catalog() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let config = test_config()?;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    let response = server.get("/api/v1/coupons").await?;
    let coupons: Vec<CouponResponse> = assert_json(response, StatusCode::OK).await?;

    assert_eq!(coupons.len(), 5);
    assert!(coupons.iter().all(|c| !c.claimed));

    let codes: Vec<&str> = coupons.iter().map(|c| c.code.as_str()).collect();
    for expected in ["WELCOME10", "SAVE15", "FREESHIP", "BOGO50", "VIP20"] {
        assert!(codes.contains(&expected), "missing seeded code {expected}");
    }

    Ok(())
}

#[tokio::test]
async fn test_claim_then_cooldown_status() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let config = test_config()?;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    // Nothing claimed yet, so claiming is permitted
    let response = server.get("/api/v1/claims/status").await?;
    let status: CooldownStatusResponse = assert_json(response, StatusCode::OK).await?;
    assert!(status.eligible);
    assert_eq!(status.remaining_seconds, 0);
    assert!(status.last_claim_at.is_none());

    // Claim a coupon
    let request = ClaimRequest::unique();
    let response = server.post("/api/v1/claims", &request).await?;
    let outcome: ClaimOutcomeResponse = assert_json(response, StatusCode::CREATED).await?;
    assert!(outcome.coupon.claimed);
    assert_eq!(outcome.claim.coupon_id, outcome.coupon.id);
    assert_eq!(outcome.claim.claimer_token, request.claimer_token);

    // The cooldown window is now open
    let response = server.get("/api/v1/claims/status").await?;
    let status: CooldownStatusResponse = assert_json(response, StatusCode::OK).await?;
    assert!(!status.eligible);
    assert!(status.remaining_seconds > 0);
    assert!(status.last_claim_at.is_some());

    // The claim shows up in the listing
    let response = server.get("/api/v1/claims").await?;
    let claims: Vec<ClaimResponse> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].claimer_token, request.claimer_token);

    Ok(())
}

#[tokio::test]
async fn test_second_claim_blocked_by_cooldown() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let config = test_config()?;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    let response = server.post("/api/v1/claims", &ClaimRequest::unique()).await?;
    assert_status(response, StatusCode::CREATED).await?;

    // Default scope is global: a different visitor is refused too
    let response = server.post("/api/v1/claims", &ClaimRequest::unique()).await?;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let error: ErrorResponse = response.json().await?;
    assert_eq!(error.error.code, "COOLDOWN_ACTIVE");

    Ok(())
}

#[tokio::test]
async fn test_claim_pool_exhaustion() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let mut config = test_config()?;
    config.cooldown.seconds = 0;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    // Drain the fixed coupon pool
    for _ in 0..5 {
        let response = server.post("/api/v1/claims", &ClaimRequest::unique()).await?;
        let outcome: ClaimOutcomeResponse = assert_json(response, StatusCode::CREATED).await?;
        assert!(outcome.coupon.claimed);
    }

    let response = server.post("/api/v1/claims", &ClaimRequest::unique()).await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = response.json().await?;
    assert_eq!(error.error.code, "NO_COUPONS_AVAILABLE");

    Ok(())
}

#[tokio::test]
async fn test_per_claimer_cooldown_scope() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let mut config = test_config()?;
    config.cooldown.scope = CooldownScope::PerClaimer;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    let first = ClaimRequest::unique();
    let response = server.post("/api/v1/claims", &first).await?;
    assert_status(response, StatusCode::CREATED).await?;

    // A different claimer is not affected by the first one's window
    let second = ClaimRequest::unique();
    let response = server.post("/api/v1/claims", &second).await?;
    assert_status(response, StatusCode::CREATED).await?;

    // But the first claimer is still cooling down
    let response = server
        .post("/api/v1/claims", &ClaimRequest::with_token(&first.claimer_token))
        .await?;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let error: ErrorResponse = response.json().await?;
    assert_eq!(error.error.code, "COOLDOWN_ACTIVE");

    // Status scoped to the second claimer reflects its own window
    let response = server
        .get(&format!(
            "/api/v1/claims/status?claimer_token={}",
            second.claimer_token
        ))
        .await?;
    let status: CooldownStatusResponse = assert_json(response, StatusCode::OK).await?;
    assert!(!status.eligible);
    assert_eq!(status.scope, "per-claimer");

    Ok(())
}

#[tokio::test]
async fn test_simultaneous_claims_one_winner() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let config = test_config()?;
    reset_claim_state(&config).await?;
    let server = TestServer::start_with_config(config).await?;

    // Two requests race within one cooldown window. The store serializes
    // admission, so one gets a coupon and the other is refused; they must
    // not each land on a different coupon.
    let first = ClaimRequest::unique();
    let second = ClaimRequest::unique();
    let (a, b) = tokio::join!(
        server.post("/api/v1/claims", &first),
        server.post("/api/v1/claims", &second),
    );

    let statuses = [a?.status(), b?.status()];
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    assert_eq!(created, 1, "exactly one racing claim may succeed: {statuses:?}");
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    // Only one claim was recorded
    let response = server.get("/api/v1/claims").await?;
    let claims: Vec<ClaimResponse> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(claims.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_malformed_claim_body_rejected() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let server = TestServer::start().await?;

    let response = server
        .client
        .post(format!("{}/api/v1/claims", server.base_url()))
        .header("content-type", "application/json")
        .body("{\"claimer_token\": ")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await?;
    assert_eq!(error.error.code, "INVALID_REQUEST_BODY");

    Ok(())
}

#[tokio::test]
async fn test_invalid_claimer_token_rejected() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let server = TestServer::start().await?;

    let response = server
        .post("/api/v1/claims", &ClaimRequest::with_token("short"))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await?;
    assert_eq!(error.error.code, "VALIDATION_ERROR");

    Ok(())
}

#[tokio::test]
async fn test_unknown_coupon_lookup() -> Result<()> {
    if !check_test_env() {
        return Ok(());
    }
    let _guard = db_guard().await;

    let server = TestServer::start().await?;

    let response = server
        .get(&format!("/api/v1/coupons/{}", uuid::Uuid::new_v4()))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get("/api/v1/coupons/not-a-uuid").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
