//! Shared error type across healthlog crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input the caller can correct.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HealthLogError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HealthLogError {
    /// A required field is missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Any other fault while handling a request (unreadable body, bad JSON).
    #[error("processing failed: {0}")]
    Processing(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl HealthLogError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HealthLogError::Validation(_) => ClientCode::BadRequest,
            HealthLogError::BadConfig(_) => ClientCode::BadRequest,
            HealthLogError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HealthLogError::Processing(_) => ClientCode::Internal,
        }
    }
}
