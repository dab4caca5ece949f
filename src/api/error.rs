//! Transport Error Types
//!
//! Failures talking to the journal backend, independent of which HTTP
//! client produced them.

use thiserror::Error;

/// Transport error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, aborted request
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Non-success HTTP status; `message` is the body's `error` field if any
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// True for failures where no usable response reached us
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Status { .. })
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
