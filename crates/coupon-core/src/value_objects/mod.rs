//! Value objects - immutable domain values with validation

mod claimer_token;
mod cooldown_policy;
mod cooldown_scope;

pub use claimer_token::{generate_claimer_token, ClaimerToken, ClaimerTokenError};
pub use cooldown_policy::CooldownPolicy;
pub use cooldown_scope::CooldownScope;
