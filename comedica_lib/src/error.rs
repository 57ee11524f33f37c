//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding session, configuration and input validation failures.
#[derive(Debug)]
pub enum BackofficeError {
    /// An error from the underlying API client.
    Api(comedica_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The session store could not be read or written.
    Session(String),
    /// Settings could not be loaded or resolved.
    Config(String),
}

impl fmt::Display for BackofficeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "{}", msg),
            Self::Session(msg) => write!(f, "Session error: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BackofficeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<comedica_api::Error> for BackofficeError {
    fn from(e: comedica_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for BackofficeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
