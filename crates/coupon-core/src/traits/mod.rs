//! Repository traits (ports) for the domain layer

mod repositories;

pub use repositories::{ClaimRepository, CouponRepository, RepoResult};
