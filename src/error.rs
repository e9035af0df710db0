//! Error types for the Shelfmark engine

use serde::Serialize;
use thiserror::Error;

/// Stable numeric codes handed to front-ends alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NotAuthenticated = 3,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    NotBorrowed = 13,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Authentication failed: invalid username or password")]
    AuthenticationFailed,

    #[error("Not authenticated: please log in first")]
    NotAuthenticated,

    #[error("Item {0} not found")]
    ItemNotFound(i32),

    #[error("Item {0} is not available")]
    ItemUnavailable(i32),

    #[error("Item {0} is not borrowed by the current patron")]
    NotBorrowed(i32),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for front-ends
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::AuthenticationFailed => ErrorCode::NotAuthorized,
            AppError::NotAuthenticated => ErrorCode::NotAuthenticated,
            AppError::ItemNotFound(_) => ErrorCode::NoSuchItem,
            AppError::ItemUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowed(_) => ErrorCode::NotBorrowed,
            AppError::InvalidItem(_) => ErrorCode::BadValue,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Everything except internal failures is a user-facing condition
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Internal(_))
    }

    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        let message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort_unstable();
        AppError::InvalidItem(format!("required field(s) empty: {}", fields.join(", ")))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
