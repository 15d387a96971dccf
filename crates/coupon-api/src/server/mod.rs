//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use coupon_common::{AppConfig, AppError};
use coupon_db::{create_pool, ensure_schema, seed_coupons, PgClaimRepository, PgCouponRepository};
use coupon_service::{CooldownPolicy, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged outside the rate-limited stack so probes
/// keep working under load.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = coupon_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create schema and seed the fixed coupon set
    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    let seeded = seed_coupons(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(seeded, "Coupon seed complete");

    if config.cooldown.scope.is_global() {
        warn!(
            cooldown_seconds = config.cooldown.seconds,
            "Cooldown scope is global: one claim locks out all visitors. \
             Set COOLDOWN_SCOPE=per-claimer to scope it to each browser token."
        );
    }

    // Create repositories
    let coupon_repo = Arc::new(PgCouponRepository::new(pool.clone()));
    let claim_repo = Arc::new(PgClaimRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .coupon_repo(coupon_repo)
        .claim_repo(claim_repo)
        .cooldown(CooldownPolicy::new(
            config.cooldown.seconds,
            config.cooldown.scope,
        ))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
