//! PostgreSQL implementation of ClaimRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use coupon_core::entities::Claim;
use coupon_core::traits::{ClaimRepository, RepoResult};
use coupon_core::value_objects::ClaimerToken;

use crate::models::ClaimModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ClaimRepository
#[derive(Clone)]
pub struct PgClaimRepository {
    pool: PgPool,
}

impl PgClaimRepository {
    /// Create a new PgClaimRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimRepository for PgClaimRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Claim>> {
        let results = sqlx::query_as::<_, ClaimModel>(
            r#"
            SELECT id, coupon_id, claimer_token, ip_address, created_at
            FROM claims
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Claim::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_latest(&self) -> RepoResult<Option<Claim>> {
        let result = sqlx::query_as::<_, ClaimModel>(
            r#"
            SELECT id, coupon_id, claimer_token, ip_address, created_at
            FROM claims
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Claim::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn find_latest_by_claimer(&self, token: &ClaimerToken) -> RepoResult<Option<Claim>> {
        let result = sqlx::query_as::<_, ClaimModel>(
            r#"
            SELECT id, coupon_id, claimer_token, ip_address, created_at
            FROM claims
            WHERE claimer_token = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Claim::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_coupon(&self, coupon_id: Uuid) -> RepoResult<Vec<Claim>> {
        let results = sqlx::query_as::<_, ClaimModel>(
            r#"
            SELECT id, coupon_id, claimer_token, ip_address, created_at
            FROM claims
            WHERE coupon_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(coupon_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Claim::try_from).collect()
    }
}
