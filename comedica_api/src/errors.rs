//! Error types for the API client.

/// Errors that can occur when calling the backoffice backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request could not be completed (network error, timeout, client setup).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The backend returned a non-success status without an in-band envelope.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The base URL or an endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The backend answered a binary endpoint with an error envelope instead of a document.
    #[error("{message}")]
    Backend { code: i64, message: String },
}
