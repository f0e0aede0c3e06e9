//! Error types for the assistant engine.
//!
//! Most of the engine is total: empty input is dropped, unknown modes fall
//! back to the executive tables, and backend failures are folded into an
//! assistant message by the turn controller. What remains here are the
//! failures a host can actually observe: unreadable or invalid configuration
//! and the backend errors a reply wrapper has to classify.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Reply backend failed: {0}")]
    BackendError(String),
    #[error("Reply backend timed out after {0} ms")]
    Timeout(u64),
}

impl AssistantError {
    /// Whether a retry has a chance of succeeding.
    pub fn is_transient(&self) -> bool {
        matches!(self, AssistantError::BackendError(_) | AssistantError::Timeout(_))
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        AssistantError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for AssistantError {
    fn from(err: serde_yaml::Error) -> Self {
        AssistantError::ConfigError(format!("Failed to parse YAML config: {}", err))
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::IoError(format!("Failed to serialize session: {}", err))
    }
}
