//! Error types for Drive port operations.

use thiserror::Error;

/// Errors from Drive port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON, JWT) are mapped to these.
#[derive(Debug, Error)]
pub enum DrivePortError {
    /// The requested file does not exist or is not visible to the credential.
    #[error("File not found: {file_id}")]
    NotFound {
        /// The file ID (or request URL) that wasn't found
        file_id: String,
    },

    /// The credential was rejected or could not be exchanged for a token.
    #[error("Authentication failed: {message}")]
    AuthFailed {
        /// Description of the failure
        message: String,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Any other non-success response from the API.
    #[error("Drive API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the API
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for Drive port operations.
pub type DrivePortResult<T> = Result<T, DrivePortError>;
