//! # coupon-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `coupon-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations
//! - Idempotent schema setup and seed data

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgClaimRepository, PgCouponRepository};
pub use schema::{ensure_schema, seed_coupons, SEED_COUPONS};
