//! Error types for lifeboard.

use thiserror::Error;

/// Result type alias using lifeboard's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lifeboard operations.
///
/// None of these variants ever cross the gateway's public accessors; they are
/// logged and replaced by fallback data there. They are the currency between
/// the store client and the gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed (transport-level)
    #[error("Request error: {0}")]
    Request(String),

    /// The hosted store answered with a non-success status
    #[error("Store error ({status}): {message}")]
    Store { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
