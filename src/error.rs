//! Error types for serper-search
//!
//! Messages never include the API key.

use serde::{Deserialize, Serialize};

/// Errors raised while configuring the client or executing a search
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No API key was supplied and `SERPER_API_KEY` is unset or empty
    #[error("SERPER_API_KEY environment variable is required")]
    MissingApiKey,

    /// Invalid settings
    #[error("config error: {0}")]
    Config(String),

    /// The search request itself is unusable (empty query, zero results)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection, DNS, TLS or timeout failure reported by the HTTP stack
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-success status
    #[error("HTTP error {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not valid JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Fieldless discriminant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey | Self::Config(_) => ErrorKind::Config,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Error category, kept alongside the message when errors are turned into values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Config,
    InvalidRequest,
    Transport,
    Status,
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "configuration error"),
            Self::InvalidRequest => write!(f, "invalid request"),
            Self::Transport => write!(f, "transport error"),
            Self::Status => write!(f, "HTTP status error"),
            Self::Decode => write!(f, "decode error"),
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SearchError>;
