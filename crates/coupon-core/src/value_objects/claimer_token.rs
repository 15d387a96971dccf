//! Claimer token value object
//!
//! An opaque, client-generated capability token standing in for real
//! authentication. It is not an identity guarantee: it does not survive the
//! client clearing its storage and is trivially forged. The server treats it
//! as nothing more than an opaque key attached to claim records.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted token length
pub const MIN_TOKEN_LEN: usize = 8;
/// Maximum accepted token length
pub const MAX_TOKEN_LEN: usize = 128;

/// Opaque claimer token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimerToken(String);

/// Claimer token validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimerTokenError {
    #[error("Claimer token must be {MIN_TOKEN_LEN}-{MAX_TOKEN_LEN} characters, got {0}")]
    InvalidLength(usize),

    #[error("Claimer token must contain only visible ASCII characters")]
    InvalidCharacters,
}

impl ClaimerToken {
    /// Validate and wrap a raw token string
    pub fn new(raw: impl Into<String>) -> Result<Self, ClaimerTokenError> {
        let raw = raw.into();
        if raw.len() < MIN_TOKEN_LEN || raw.len() > MAX_TOKEN_LEN {
            return Err(ClaimerTokenError::InvalidLength(raw.len()));
        }
        if !raw.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ClaimerTokenError::InvalidCharacters);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the raw token value
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClaimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClaimerToken {
    type Error = ClaimerTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClaimerToken> for String {
    fn from(token: ClaimerToken) -> Self {
        token.0
    }
}

/// Generate a random claimer token
///
/// Matches what a client would persist locally on first use. Exposed mainly
/// for tests and tooling; real clients generate their own.
pub fn generate_claimer_token() -> ClaimerToken {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 32;

    let mut rng = rand::thread_rng();
    let raw: String = (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    ClaimerToken(raw)
}
