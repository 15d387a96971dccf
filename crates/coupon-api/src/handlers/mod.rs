//! Request handlers for all API endpoints

pub mod claims;
pub mod coupons;
pub mod health;
