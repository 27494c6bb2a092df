use thiserror::Error;

use super::user::ValidationReason;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {reason}")]
    Validation { reason: ValidationReason },

    #[error("User '{id}' already exists")]
    AlreadyExists { id: String },

    #[error("User '{id}' not found")]
    NotFound { id: String },

    /// Carries no detail so that callers cannot tell an unknown user from a
    /// wrong password.
    #[error("Authentication failed")]
    AuthFailed,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(reason: ValidationReason) -> Self {
        Self::Validation { reason }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
