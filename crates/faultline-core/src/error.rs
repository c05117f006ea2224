//! Shared error type across faultline crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input or configuration.
    BadRequest,
    /// A metric name is already registered.
    DuplicateName,
    /// A route path is already bound.
    Conflict,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::DuplicateName => "DUPLICATE_NAME",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FaultlineError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum FaultlineError {
    #[error("metric already registered: {0}")]
    DuplicateName(String),
    #[error("invalid metric name: {0}")]
    InvalidName(String),
    #[error("route already bound: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("handler failed: {0}")]
    Handler(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FaultlineError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FaultlineError::DuplicateName(_) => ClientCode::DuplicateName,
            FaultlineError::InvalidName(_) | FaultlineError::BadRequest(_) => ClientCode::BadRequest,
            FaultlineError::Conflict(_) => ClientCode::Conflict,
            FaultlineError::Handler(_) | FaultlineError::Bind(_) | FaultlineError::Internal(_) => {
                ClientCode::Internal
            }
        }
    }
}
