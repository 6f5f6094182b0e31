//! Client error types.

use ics2tbricks_core::TransformError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The URL is not an `http://` or `https://` URL. Raised before any
    /// network access.
    #[error("invalid URL scheme, expected http:// or https://: {0}")]
    InvalidUrlScheme(String),

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The transform rejected the ICS data.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
