//! Internal API types for the Drive v2 REST API.
//!
//! These types are internal to `reportdrive-gdrive` and are not exposed to
//! consumers. External consumers use the DTOs defined in `reportdrive-core`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DriveClientConfig;
use crate::error::{DriveError, DriveResult};

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Drive client.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Base URL for the Drive API (default: <https://www.googleapis.com/drive/v2>)
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// OAuth token endpoint
    pub token_uri: String,
    /// OAuth scopes requested for service accounts
    pub scopes: Vec<String>,
}

impl DriveConfig {
    /// Validate the public config and derive the internal one.
    pub fn from_public(config: &DriveClientConfig) -> DriveResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DriveError::InvalidConfig {
                message: format!("base URL cannot carry a path: {base_url}"),
            });
        }
        Url::parse(&config.token_uri)?;

        Ok(Self {
            base_url,
            user_agent: config.user_agent(),
            timeout: config.timeout,
            token_uri: config.token_uri.clone(),
            scopes: config.scopes.clone(),
        })
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        let public = DriveClientConfig::default();
        Self {
            base_url: Url::parse(&public.base_url).expect("default Drive API URL is valid"),
            user_agent: public.user_agent(),
            timeout: public.timeout,
            token_uri: public.token_uri,
            scopes: public.scopes,
        }
    }
}

// ============================================================================
// File resource
// ============================================================================

/// Reference to a parent folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParentReference {
    /// Parent folder ID
    pub id: String,
}

/// File labels; only `trashed` is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiLabels {
    /// Whether the file is in the trash
    #[serde(default)]
    pub trashed: bool,
}

/// Drive v2 `File` resource (the fields this crate reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFile {
    /// File ID
    pub id: String,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Parent folders
    #[serde(default)]
    pub parents: Vec<ApiParentReference>,
    /// Labels
    #[serde(default)]
    pub labels: Option<ApiLabels>,
    /// Browser link
    #[serde(default)]
    pub alternate_link: Option<String>,
    /// Last modification time (RFC 3339)
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Result of `files.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFileList {
    /// Files on this page
    #[serde(default)]
    pub items: Vec<ApiFile>,
    /// Token for the next page; never followed
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Entry of a `children.list` result.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiChildReference {
    /// Child file ID
    pub id: String,
}

/// Result of `children.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChildList {
    /// Children on this page
    #[serde(default)]
    pub items: Vec<ApiChildReference>,
    /// Token for the next page; never followed
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Body of a folder `files.insert`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNewFolder {
    /// Folder title
    pub title: String,
    /// Always the folder MIME type
    pub mime_type: String,
    /// Folder description
    pub description: String,
    /// Parent folders; omitted for the drive root
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<ApiParentReference>,
}

// ============================================================================
// Errors
// ============================================================================

/// Google JSON error envelope: `{"error": {"code": 404, "message": "..."}}`.
///
/// Only the message is kept; the status comes from the response itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details
    pub error: ApiErrorBody,
}

/// Body of a Google JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub message: String,
}
