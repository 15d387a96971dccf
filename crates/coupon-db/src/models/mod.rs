//! Database models - SQLx-compatible structs for PostgreSQL tables

mod claim;
mod coupon;

pub use claim::ClaimModel;
pub use coupon::CouponModel;
