//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod catalog;
pub mod claim;
pub mod context;
pub mod error;

// Re-export all services for convenience
pub use catalog::CatalogService;
pub use claim::ClaimService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
