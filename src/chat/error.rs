//! Chat Error Types

use thiserror::Error;

use crate::api::ApiError;

/// Shown when no usable response came back
pub const GENERIC_FAILURE: &str = "Failed to send message. Please try again.";
/// Shown when the backend rejected the message without saying why
pub const SUBMIT_FAILURE: &str = "Failed to submit message";

/// Why a send did not produce a turn. None of these change the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    /// Network failure or an unreadable response
    #[error("Transport error: {0}")]
    Transport(ApiError),

    /// Non-success HTTP status
    #[error("Rejected with status {status}: {}", .message.as_deref().unwrap_or(SUBMIT_FAILURE))]
    Rejected { status: u16, message: Option<String> },

    /// Success status, but the body carried an `error` field
    #[error("Server error: {0}")]
    Application(String),

    /// A newer response was already applied
    #[error("Discarded stale response #{seq}")]
    Stale { seq: u64 },
}

impl From<ApiError> for ChatError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status, message } => ChatError::Rejected { status, message },
            other => ChatError::Transport(other),
        }
    }
}

impl ChatError {
    /// The single notification to show the user, if any
    pub fn alert_message(&self) -> Option<String> {
        match self {
            ChatError::Transport(_) => Some(GENERIC_FAILURE.to_string()),
            ChatError::Rejected { message, .. } => Some(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(SUBMIT_FAILURE)
                    .to_string(),
            ),
            ChatError::Application(message) if message.is_empty() => Some(SUBMIT_FAILURE.to_string()),
            ChatError::Application(message) => Some(message.clone()),
            ChatError::Stale { .. } => None,
        }
    }
}
