//! Drive client port traits.

use super::error::DrivePortResult;
use crate::domain::{DriveCredential, DriveFile, FolderSpec};
use async_trait::async_trait;
use std::sync::Arc;

/// Port trait for the remote Drive operations.
///
/// The implementation lives in `reportdrive-gdrive`.
///
/// # Design
///
/// - Uses core-owned DTOs, not Drive API types
/// - Returns `DrivePortError` for all failures
/// - Listings read a single page; no retries
#[async_trait]
pub trait DriveClientPort: Send + Sync {
    /// Find a non-trashed folder titled exactly `title`.
    ///
    /// With `parent_id`, only that folder's children are searched and the
    /// returned reference carries only an ID. Without it, the whole drive is
    /// searched. Returns the first match.
    async fn find_folder(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> DrivePortResult<Option<DriveFile>>;

    /// Create a folder and return the created resource.
    async fn create_folder(&self, spec: &FolderSpec) -> DrivePortResult<DriveFile>;

    /// Fetch file metadata by ID.
    async fn get_file(&self, file_id: &str) -> DrivePortResult<DriveFile>;
}

/// Builds authenticated Drive clients.
#[cfg_attr(test, mockall::automock)]
pub trait DriveClientFactory: Send + Sync {
    /// Create a client authenticated with `credential`.
    fn create(&self, credential: &DriveCredential) -> DrivePortResult<Arc<dyn DriveClientPort>>;
}
