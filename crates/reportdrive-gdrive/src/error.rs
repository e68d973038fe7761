//! Internal error types for Drive operations.
//!
//! These errors are internal to `reportdrive-gdrive` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for Drive operations.
pub type DriveResult<T> = Result<T, DriveError>;

/// Errors related to Drive API and token endpoint calls.
#[derive(Debug, Error)]
pub enum DriveError {
    /// API request failed with an HTTP error status.
    #[error("Drive API request failed with status {status}: {url}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Message from the Google error body, or the raw body
        message: String,
    },

    /// The OAuth token endpoint rejected the credential.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status code
        status: u16,
        /// OAuth error and description
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Drive API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Client configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Service account key could not be used to sign the JWT assertion.
    #[error("Service account signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
