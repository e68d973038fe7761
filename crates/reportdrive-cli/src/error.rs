//! CLI-specific error types and mappings.
//!
//! Port errors are mapped to exit codes and user-facing messages here.

use reportdrive_core::DrivePortError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials were rejected or lack permission.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Drive could not serve the request.
    #[error("Drive unavailable: {0}")]
    Unavailable(String),

    /// Drive answered with something we could not read.
    #[error("Unexpected response: {0}")]
    Protocol(String),

    /// Missing or inconsistent settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Codes follow sysexits.h.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Auth(_) => 77,        // EX_NOPERM
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Protocol(_) => 76,    // EX_PROTOCOL
            Self::Config(_) => 78,      // EX_CONFIG
            Self::Io(_) => 74,          // EX_IOERR
        }
    }
}

impl From<DrivePortError> for CliError {
    fn from(err: DrivePortError) -> Self {
        match err {
            DrivePortError::NotFound { file_id } => Self::NotFound(file_id),
            DrivePortError::AuthFailed { message } => Self::Auth(message),
            DrivePortError::RateLimited => Self::Unavailable("rate limit exceeded".to_string()),
            DrivePortError::Api { status, message } => {
                Self::Unavailable(format!("HTTP {status}: {message}"))
            }
            DrivePortError::Network { message } => Self::Unavailable(message),
            DrivePortError::InvalidResponse { message } => Self::Protocol(message),
            DrivePortError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned from a command.
///
/// Errors that never went through [`CliError`] exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
