//! Schema setup and seed data
//!
//! Both operations are idempotent and run at startup: `ensure_schema` uses
//! CREATE TABLE IF NOT EXISTS, `seed_coupons` inserts with
//! ON CONFLICT DO NOTHING so a restart never duplicates rows.

use sqlx::PgPool;
use tracing::{info, instrument};

use coupon_core::entities::Coupon;

/// The five promotional codes shipped with the application
pub const SEED_COUPONS: [(&str, &str); 5] = [
    ("WELCOME10", "10% off your first order"),
    ("SAVE15", "15% off orders over $50"),
    ("FREESHIP", "Free shipping on any order"),
    ("BOGO50", "Buy one get one 50% off"),
    ("VIP20", "20% off for VIP members"),
];

/// Create the coupons and claims tables if they do not exist
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS coupons (
            id UUID PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL,
            claimed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS claims (
            id UUID PRIMARY KEY,
            coupon_id UUID NOT NULL UNIQUE REFERENCES coupons (id),
            claimer_token TEXT NOT NULL,
            ip_address TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Cooldown checks and per-claimer history both sort claims by recency
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_claims_created_at ON claims (created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_claims_claimer_token ON claims (claimer_token, created_at DESC)",
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}

/// Insert the fixed seed coupons, skipping any code already present
#[instrument(skip(pool))]
pub async fn seed_coupons(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for (code, description) in SEED_COUPONS {
        let coupon = Coupon::new(code, description);
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
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    info!(inserted, "Seed coupons ensured");
    Ok(inserted)
}
