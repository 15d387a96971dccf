//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in coupon-core.

mod claim;
mod coupon;
mod error;

pub use claim::PgClaimRepository;
pub use coupon::PgCouponRepository;
