//! # coupon-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ClaimCouponRequest, ClaimOutcomeResponse, ClaimResponse, CooldownStatusResponse,
    CouponResponse, HealthResponse, ReadinessResponse,
};
// CooldownPolicy lives in coupon-core; re-exported here so callers wiring
// up the service layer need only this crate.
pub use coupon_core::value_objects::CooldownPolicy;
pub use services::{
    CatalogService, ClaimService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
