//! Cooldown scope value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which claims count against the cooldown window.
///
/// The original application consulted the single most recent claim by anyone,
/// making the cooldown global across all visitors. That behavior is preserved
/// as the default; `PerClaimer` scopes the check to the submitting token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CooldownScope {
    #[default]
    Global,
    PerClaimer,
}

impl CooldownScope {
    pub fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for CooldownScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::PerClaimer => f.write_str("per-claimer"),
        }
    }
}

impl FromStr for CooldownScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "per-claimer" | "per_claimer" => Ok(Self::PerClaimer),
            other => Err(format!("Unknown cooldown scope: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_global() {
        assert_eq!(CooldownScope::default(), CooldownScope::Global);
        assert!(CooldownScope::default().is_global());
    }

    #[test]
    fn test_parse() {
        assert_eq!("global".parse::<CooldownScope>(), Ok(CooldownScope::Global));
        assert_eq!(
            "per-claimer".parse::<CooldownScope>(),
            Ok(CooldownScope::PerClaimer)
        );
        assert_eq!(
            "PER_CLAIMER".parse::<CooldownScope>(),
            Ok(CooldownScope::PerClaimer)
        );
        assert!("hourly".parse::<CooldownScope>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CooldownScope::Global.to_string(), "global");
        assert_eq!(CooldownScope::PerClaimer.to_string(), "per-claimer");
    }
}
