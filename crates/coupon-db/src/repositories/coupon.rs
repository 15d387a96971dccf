//! PostgreSQL implementation of CouponRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use coupon_core::entities::{Claim, Coupon};
use coupon_core::error::DomainError;
use coupon_core::traits::{CouponRepository, RepoResult};
use coupon_core::value_objects::{ClaimerToken, CooldownPolicy, CooldownScope};

use crate::models::CouponModel;

use super::error::{map_db_error, map_unique_violation};

/// Advisory lock key serializing claim admission under the global scope
const GLOBAL_CLAIM_LOCK_KEY: i64 = 0x636f_7570_6f6e;

/// PostgreSQL implementation of CouponRepository
#[derive(Clone)]
pub struct PgCouponRepository {
    pool: PgPool,
}

impl PgCouponRepository {
    /// Create a new PgCouponRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponRepository for PgCouponRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Coupon>> {
        let result = sqlx::query_as::<_, CouponModel>(
            r#"
            SELECT id, code, description, claimed, created_at
            FROM coupons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Coupon::from))
    }

    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Coupon>> {
        let result = sqlx::query_as::<_, CouponModel>(
            r#"
            SELECT id, code, description, claimed, created_at
            FROM coupons
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Coupon::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Coupon>> {
        let results = sqlx::query_as::<_, CouponModel>(
            r#"
            SELECT id, code, description, claimed, created_at
            FROM coupons
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Coupon::from).collect())
    }

    #[instrument(skip(self))]
    async fn available_count(&self) -> RepoResult<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM coupons WHERE claimed = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self, coupon), fields(code = %coupon.code))]
    async fn create_if_absent(&self, coupon: &Coupon) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO coupons (id, code, description, claimed, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(coupon.id)
        .bind(&coupon.code)
        .bind(&coupon.description)
        .bind(coupon.claimed)
        .bind(coupon.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, claimer_token))]
    async fn claim_next_available(
        &self,
        claimer_token: &ClaimerToken,
        ip_address: Option<&str>,
        cooldown: CooldownPolicy,
    ) -> RepoResult<(Coupon, Claim)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The cooldown check and the claim insert must not interleave across
        // transactions: without the lock, two claimants both read "no recent
        // claim" and SKIP LOCKED then steers them onto different coupons.
        // The transaction-scoped advisory lock serializes admission per
        // scope, and the latest-claim read below is authoritative under it.
        if cooldown.is_enforced() {
            let latest: Option<(DateTime<Utc>,)> = match cooldown.scope {
                CooldownScope::Global => {
                    sqlx::query("SELECT pg_advisory_xact_lock($1)")
                        .bind(GLOBAL_CLAIM_LOCK_KEY)
                        .execute(&mut *tx)
                        .await
                        .map_err(map_db_error)?;

                    sqlx::query_as(
                        "SELECT created_at FROM claims ORDER BY created_at DESC LIMIT 1",
                    )
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(map_db_error)?
                }
                CooldownScope::PerClaimer => {
                    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
                        .bind(claimer_token.as_str())
                        .execute(&mut *tx)
                        .await
                        .map_err(map_db_error)?;

                    sqlx::query_as(
                        r#"
                        SELECT created_at FROM claims
                        WHERE claimer_token = $1
                        ORDER BY created_at DESC
                        LIMIT 1
                        "#,
                    )
                    .bind(claimer_token.as_str())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(map_db_error)?
                }
            };

            if let Some((last_claim_at,)) = latest {
                let remaining = cooldown.remaining_seconds(last_claim_at, Utc::now());
                if remaining > 0 {
                    tx.rollback().await.map_err(map_db_error)?;
                    return Err(DomainError::CooldownActive {
                        remaining_seconds: remaining,
                    });
                }
            }
        }

        // Row-locking conditional update: concurrent claimants each lock a
        // distinct unclaimed row (SKIP LOCKED), so the claimed flag only ever
        // transitions false -> true and no two claims land on one coupon.
        let claimed_row = sqlx::query_as::<_, CouponModel>(
            r#"
            UPDATE coupons
            SET claimed = TRUE
            WHERE id = (
                SELECT id
                FROM coupons
                WHERE claimed = FALSE
                ORDER BY created_at ASC
                LIMIT 1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING id, code, description, claimed, created_at
            "#,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = claimed_row else {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::NoCouponsAvailable);
        };

        let coupon = Coupon::from(model);

        let mut claim = Claim::new(coupon.id, claimer_token.clone());
        if let Some(ip) = ip_address {
            claim = claim.with_ip_address(ip);
        }

        // Insert in the same transaction: if this fails, the claimed flag
        // rolls back and no orphaned coupon is left behind.
        sqlx::query(
            r#"
            INSERT INTO claims (id, coupon_id, claimer_token, ip_address, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(claim.id)
        .bind(claim.coupon_id)
        .bind(claim.claimer_token.as_str())
        .bind(claim.ip_address.as_deref())
        .bind(claim.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CouponAlreadyClaimed(coupon.id)))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((coupon, claim))
    }
}
