//! Domain entities - core business objects

mod claim;
mod coupon;

pub use claim::Claim;
pub use coupon::Coupon;
