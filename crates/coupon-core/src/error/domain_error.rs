//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::ClaimerTokenError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // Not Found
    #[error("Coupon not found: {0}")]
    CouponNotFound(Uuid),

    // Validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidClaimerToken(#[from] ClaimerTokenError),

    // Conflict / business rules
    #[error("Coupon code already exists: {0}")]
    CouponCodeExists(String),

    #[error("Coupon already claimed: {0}")]
    CouponAlreadyClaimed(Uuid),

    #[error("No coupons available to claim")]
    NoCouponsAvailable,

    #[error("Cooldown active: next claim permitted in {remaining_seconds} seconds")]
    CooldownActive { remaining_seconds: i64 },

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CouponNotFound(_) => "UNKNOWN_COUPON",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidClaimerToken(_) => "INVALID_CLAIMER_TOKEN",
            Self::CouponCodeExists(_) => "COUPON_CODE_EXISTS",
            Self::CouponAlreadyClaimed(_) => "COUPON_ALREADY_CLAIMED",
            Self::NoCouponsAvailable => "NO_COUPONS_AVAILABLE",
            Self::CooldownActive { .. } => "COOLDOWN_ACTIVE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CouponNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidClaimerToken(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CouponCodeExists(_) | Self::CouponAlreadyClaimed(_) | Self::NoCouponsAvailable
        )
    }

    /// Check if this is a rate-limit error
    pub fn is_cooldown(&self) -> bool {
        matches!(self, Self::CooldownActive { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let id = Uuid::new_v4();
        assert_eq!(DomainError::CouponNotFound(id).code(), "UNKNOWN_COUPON");
        assert_eq!(DomainError::NoCouponsAvailable.code(), "NO_COUPONS_AVAILABLE");
        assert_eq!(
            DomainError::CooldownActive {
                remaining_seconds: 42
            }
            .code(),
            "COOLDOWN_ACTIVE"
        );
    }

    #[test]
    fn test_classification() {
        let id = Uuid::new_v4();
        assert!(DomainError::CouponNotFound(id).is_not_found());
        assert!(DomainError::CouponAlreadyClaimed(id).is_conflict());
        assert!(DomainError::NoCouponsAvailable.is_conflict());
        assert!(DomainError::CooldownActive {
            remaining_seconds: 1
        }
        .is_cooldown());
        assert!(!DomainError::NoCouponsAvailable.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CooldownActive {
            remaining_seconds: 120,
        };
        assert_eq!(
            err.to_string(),
            "Cooldown active: next claim permitted in 120 seconds"
        );
    }
}
