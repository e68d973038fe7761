//! Public configuration for the Drive client.
//!
//! This module provides a stable public API for configuring the Drive client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default Drive REST API v2 base URL.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v2";
/// Default Google OAuth token endpoint.
pub(crate) const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
/// Default scope: full Drive access.
pub(crate) const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/drive";
/// Default application name reported in the user agent.
pub(crate) const DEFAULT_APPLICATION_NAME: &str = "AwReporting-AppEngine";

/// Configuration for the Drive client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use reportdrive_gdrive::DriveClientConfig;
/// use std::time::Duration;
///
/// let config = DriveClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_application_name("nightly-exporter");
/// ```
#[derive(Debug, Clone)]
pub struct DriveClientConfig {
    /// Base URL for the Drive API
    pub(crate) base_url: String,
    /// Application name, sent as the user agent prefix
    pub(crate) application_name: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// OAuth token endpoint (service accounts may override it in their key)
    pub(crate) token_uri: String,
    /// OAuth scopes requested for service accounts
    pub(crate) scopes: Vec<String>,
}

impl Default for DriveClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            timeout: Duration::from_secs(30),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            scopes: vec![DEFAULT_SCOPE.to_string()],
        }
    }
}

impl DriveClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Drive API.
    ///
    /// Defaults to `https://www.googleapis.com/drive/v2`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the application name reported to Google.
    ///
    /// Defaults to `AwReporting-AppEngine`.
    #[must_use]
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the OAuth token endpoint.
    #[must_use]
    pub fn with_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.token_uri = uri.into();
        self
    }

    /// Replace the OAuth scopes requested for service accounts.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// User agent sent with every request.
    pub(crate) fn user_agent(&self) -> String {
        format!(
            "{} reportdrive-gdrive/{}",
            self.application_name,
            env!("CARGO_PKG_VERSION")
        )
    }
}
