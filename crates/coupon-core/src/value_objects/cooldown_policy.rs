//! Cooldown policy value object

use chrono::{DateTime, Utc};

use super::CooldownScope;

/// Cooldown policy: minimum interval between successive claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownPolicy {
    /// Minimum interval in seconds
    pub seconds: i64,
    /// Which claims count against the window
    pub scope: CooldownScope,
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self {
            seconds: 3600,
            scope: CooldownScope::Global,
        }
    }
}

impl CooldownPolicy {
    pub fn new(seconds: i64, scope: CooldownScope) -> Self {
        Self { seconds, scope }
    }

    /// Whether the policy imposes any window at all
    pub fn is_enforced(&self) -> bool {
        self.seconds > 0
    }

    /// Seconds until the next claim is permitted, given the most recent
    /// relevant claim. Zero means claiming is allowed now.
    pub fn remaining_seconds(&self, last_claim_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - last_claim_at).num_seconds();
        (self.seconds - elapsed).max(0)
    }
}
