//! Service layer error type

use mastera_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller lacks the role an operation requires
    #[error("Missing required role: {role}")]
    PermissionDenied { role: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// A required collaborator was not supplied to the context builder
    #[error("Service context is missing {0}")]
    MissingComponent(&'static str),
}

impl ServiceError {
    pub fn permission_denied(role: impl Into<String>) -> Self {
        Self::PermissionDenied { role: role.into() }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(_) | Self::MissingComponent(_) => 500,
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
        }
    }

    /// Machine-readable code for the response envelope
    ///
    /// Every bad-input failure shares `VALIDATION_ERROR`; the message carries
    /// the reason.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) if e.is_validation() => "VALIDATION_ERROR",
            Self::Domain(e) if e.is_internal() => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
            Self::PermissionDenied { .. } => "INSUFFICIENT_PERMISSIONS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingComponent(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mastera_core::WorkId;

    #[test]
    fn test_work_not_found() {
        let err = ServiceError::from(DomainError::WorkNotFound(WorkId::new()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "WORK_NOT_FOUND");
    }

    #[test]
    fn test_domain_validation_uses_shared_code() {
        let err = ServiceError::from(DomainError::InvalidReactionAction("love".to_string()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("love"));
    }

    #[test]
    fn test_storage_failure_is_internal() {
        let err = ServiceError::from(DomainError::DatabaseError("connection reset".to_string()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_permission_denied() {
        let err = ServiceError::permission_denied("admin");
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "INSUFFICIENT_PERMISSIONS");
        assert_eq!(err.to_string(), "Missing required role: admin");
    }

    #[test]
    fn test_missing_component() {
        let err = ServiceError::MissingComponent("work_repo");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Service context is missing work_repo");
    }
}
