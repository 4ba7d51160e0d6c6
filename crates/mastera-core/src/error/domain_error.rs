//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::WorkId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Work not found: {0}")]
    WorkNotFound(WorkId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown reaction action: {0}")]
    InvalidReactionAction(String),

    #[error("Quick pick order must be non-negative, got {0}")]
    InvalidQuickPickOrder(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::WorkNotFound(_) => "WORK_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionAction(_) => "INVALID_REACTION_ACTION",
            Self::InvalidQuickPickOrder(_) => "INVALID_QUICK_PICK_ORDER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WorkNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionAction(_)
                | Self::InvalidQuickPickOrder(_)
        )
    }

    /// Check if this is a storage or internal failure
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
