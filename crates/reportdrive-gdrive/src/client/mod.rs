//! Drive client for folder lookups, folder creation and file fetches.

mod files;
mod folders;

use reportdrive_core::DriveCredential;

use crate::auth::provider_for;
use crate::config::DriveClientConfig;
use crate::error::DriveResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::DriveConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Drive client using the reqwest HTTP backend.
pub type DefaultDriveClient = DriveClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Drive v2 REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultDriveClient` for production code and talk to it through the
/// `DriveClientPort` trait.
pub struct DriveClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: DriveConfig,
}

impl DefaultDriveClient {
    /// Create a client authenticated with `credential`.
    pub fn new(config: &DriveClientConfig, credential: &DriveCredential) -> DriveResult<Self> {
        let internal_config = DriveConfig::from_public(config)?;
        let http = ReqwestBackend::build_client(&internal_config)?;
        let tokens = provider_for(credential, &internal_config, http.clone());
        Ok(Self {
            backend: ReqwestBackend::new(http, tokens),
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> DriveClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: DriveConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
