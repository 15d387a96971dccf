//! # coupon-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Claim, Coupon};
pub use error::DomainError;
pub use traits::{ClaimRepository, CouponRepository, RepoResult};
pub use value_objects::{
    generate_claimer_token, ClaimerToken, ClaimerTokenError, CooldownPolicy, CooldownScope,
};
