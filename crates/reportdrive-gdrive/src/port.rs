//! Port trait implementations for `DriveClient`.
//!
//! This module implements the core-owned `DriveClientPort` and
//! `DriveClientFactory` traits, handling the conversion between internal
//! Drive API types and core DTOs.

use std::sync::Arc;

use async_trait::async_trait;
use reportdrive_core::ports::{
    DriveClientFactory, DriveClientPort, DrivePortError, DrivePortResult,
};
use reportdrive_core::{DriveCredential, DriveFile, FolderSpec};

use crate::client::{DefaultDriveClient, DriveClient};
use crate::config::DriveClientConfig;
use crate::error::DriveError;
use crate::http::HttpBackend;
use crate::models::ApiFile;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `DriveError` to core `DrivePortError`.
fn map_error(err: DriveError) -> DrivePortError {
    match err {
        DriveError::ApiRequestFailed {
            status,
            url,
            message,
        } => match status {
            404 => DrivePortError::NotFound {
                file_id: extract_file_id_from_url(&url),
            },
            401 | 403 => DrivePortError::AuthFailed { message },
            429 => DrivePortError::RateLimited,
            _ => DrivePortError::Api { status, message },
        },
        DriveError::TokenRequestFailed { status, message } => DrivePortError::AuthFailed {
            message: format!("token endpoint returned {status}: {message}"),
        },
        DriveError::Signing(e) => DrivePortError::AuthFailed {
            message: e.to_string(),
        },
        DriveError::InvalidResponse { message } => DrivePortError::InvalidResponse { message },
        DriveError::InvalidConfig { message } => DrivePortError::Configuration { message },
        DriveError::Network(e) => DrivePortError::Network {
            message: e.to_string(),
        },
        DriveError::InvalidUrl(e) => DrivePortError::Configuration {
            message: e.to_string(),
        },
        DriveError::JsonParse(e) => DrivePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Extract the file ID from a `files/{id}` URL, or return the URL.
fn extract_file_id_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit_once("/files/")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(rest))
        .filter(|id| !id.is_empty())
        .map_or_else(
            || url.to_string(),
            |id| {
                urlencoding::decode(id)
                    .map_or_else(|_| id.to_string(), std::borrow::Cow::into_owned)
            },
        )
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert an API file resource to the core `DriveFile`.
fn to_drive_file(file: ApiFile) -> DriveFile {
    DriveFile {
        id: file.id,
        title: file.title,
        mime_type: file.mime_type,
        description: file.description,
        parent_ids: file.parents.into_iter().map(|p| p.id).collect(),
        trashed: file.labels.map(|l| l.trashed),
        alternate_link: file.alternate_link,
        modified_date: file.modified_date,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> DriveClientPort for DriveClient<B> {
    async fn find_folder(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> DrivePortResult<Option<DriveFile>> {
        if let Some(parent_id) = parent_id {
            let children = self
                .find_child_folders(parent_id, title)
                .await
                .map_err(map_error)?;
            return Ok(children
                .into_iter()
                .next()
                .map(|child| DriveFile::with_id(child.id)));
        }

        let folders = self.find_folders(title).await.map_err(map_error)?;
        Ok(folders.into_iter().next().map(to_drive_file))
    }

    async fn create_folder(&self, spec: &FolderSpec) -> DrivePortResult<DriveFile> {
        self.insert_folder(spec)
            .await
            .map(to_drive_file)
            .map_err(map_error)
    }

    async fn get_file(&self, file_id: &str) -> DrivePortResult<DriveFile> {
        self.fetch_file(file_id)
            .await
            .map(to_drive_file)
            .map_err(map_error)
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Builds reqwest-backed Drive clients from credentials.
#[derive(Debug, Clone, Default)]
pub struct GoogleDriveFactory {
    config: DriveClientConfig,
}

impl GoogleDriveFactory {
    /// Create a factory that configures every client with `config`.
    pub const fn new(config: DriveClientConfig) -> Self {
        Self { config }
    }
}

impl DriveClientFactory for GoogleDriveFactory {
    fn create(&self, credential: &DriveCredential) -> DrivePortResult<Arc<dyn DriveClientPort>> {
        let client = DefaultDriveClient::new(&self.config, credential).map_err(map_error)?;
        Ok(Arc::new(client))
    }
}
