//! Entity to model mappers
//!
//! Conversions between domain entities (coupon-core) and database models.
//! - `From<CouponModel> for Coupon`: convert database rows to domain objects
//! - `TryFrom<ClaimModel> for Claim`: fallible because the stored claimer
//!   token is re-validated on the way out

mod claim;
mod coupon;
