//! Error types for Rootly alert creation.

use thiserror::Error;

/// Errors that can occur while talking to the Rootly API or running the action.
#[derive(Debug, Error)]
pub enum AlertError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("HTTP error! status: {status} {message}")]
    Api { status: u16, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Notification target type is not one of the supported kinds.
    #[error("Invalid notification target type")]
    InvalidTargetType,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing an action output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
