//! Domain error taxonomy.
//!
//! Every failure is an expected outcome of multi-party interaction and is
//! returned to the caller unchanged. `Internal` is reserved for store
//! failures and never produced by a business rule.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input; the caller must correct it
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// Referenced entity does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Caller lacks the role or standing required
    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    /// Well-formed operation that is illegal in the entity's current state
    #[error("Cannot {action} while {state}")]
    InvalidTransition { state: String, action: String },

    /// A concurrency or uniqueness invariant was violated at commit time
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Store or infrastructure failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(state: impl Into<String>, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            state: state.into(),
            action: action.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, shared with the API error envelope
    pub fn code(&self) -> &'static str {
        use tp_shared::error_codes;
        match self {
            DomainError::ValidationFailed { .. } => error_codes::VALIDATION_FAILED,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
            DomainError::InvalidTransition { .. } => error_codes::INVALID_TRANSITION,
            DomainError::Conflict { .. } => error_codes::CONFLICT,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Whether re-reading state and reissuing the operation may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Conflict { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
