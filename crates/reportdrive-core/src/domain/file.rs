//! Thin mirror of the Drive file resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::folders::FOLDER_MIME_TYPE;

/// A file or folder stored in Drive.
///
/// Only `id` is guaranteed. References returned by a child listing carry
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DriveFile {
    /// Drive file ID
    pub id: String,
    /// Title shown in the Drive UI
    pub title: Option<String>,
    /// MIME type (folders use [`FOLDER_MIME_TYPE`])
    pub mime_type: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// IDs of the parent folders
    #[serde(default)]
    pub parent_ids: Vec<String>,
    /// Whether the file is in the trash
    pub trashed: Option<bool>,
    /// Link for opening the file in a browser
    pub alternate_link: Option<String>,
    /// Last modification time
    pub modified_date: Option<DateTime<Utc>>,
}

impl DriveFile {
    /// A reference carrying only the file ID.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Whether this resource is known to be a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }
}

/// Body of a folder creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    /// Folder title
    pub title: String,
    /// Folder description
    pub description: String,
    /// Parent folder; `None` creates the folder in the drive root
    pub parent_id: Option<String>,
}
