//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// User-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// No user with this name exists.
    NotFound(String),
    /// Another user already holds this name.
    NameTaken(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(name: impl Into<String>) -> Self {
        UserError::NotFound(name.into())
    }
    pub fn name_taken(name: impl Into<String>) -> Self {
        UserError::NameTaken(name.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::NameTaken(_) => ErrorCode::NameTaken,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(name) => format!("A user named '{}' does not exist", name),
            UserError::NameTaken(name) => format!("A user named '{}' already exists", name),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NameTaken => UserError::NameTaken(err.message),
            ErrorCode::UserNotFound => UserError::NotFound(err.message),
            ErrorCode::ValidationFailed => UserError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}
