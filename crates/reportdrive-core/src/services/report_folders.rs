//! Lookup-or-create operations for the report folders.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    DriveFile, account_folder_spec, account_folder_title, reports_folder_spec,
    reports_folder_title,
};
use crate::ports::{DriveClientPort, DrivePortResult};

/// Report folder operations bound to one authenticated Drive client.
///
/// Operations on one service run one at a time, so two concurrent
/// lookups for the same folder cannot both miss and create duplicates.
pub struct ReportFolderService {
    drive: Arc<dyn DriveClientPort>,
    op_lock: Mutex<()>,
}

impl ReportFolderService {
    /// Wrap an authenticated Drive client.
    pub fn new(drive: Arc<dyn DriveClientPort>) -> Self {
        Self {
            drive,
            op_lock: Mutex::new(()),
        }
    }

    /// The underlying Drive client.
    pub fn drive(&self) -> Arc<dyn DriveClientPort> {
        Arc::clone(&self.drive)
    }

    /// Get the reports folder for a manager account, creating it if missing.
    pub async fn reports_folder(&self, mcc_account_id: &str) -> DrivePortResult<DriveFile> {
        let _guard = self.op_lock.lock().await;
        let title = reports_folder_title(mcc_account_id);

        tracing::info!(%title, "Executing find folder query");
        if let Some(folder) = self.drive.find_folder(&title, None).await? {
            tracing::debug!(id = %folder.id, "Found existing reports folder");
            return Ok(folder);
        }

        tracing::info!(%title, "Creating reports folder");
        self.drive
            .create_folder(&reports_folder_spec(mcc_account_id))
            .await
    }

    /// Get the sub-folder for `account_id` inside `parent`, creating it if
    /// missing.
    ///
    /// An existing sub-folder is returned as an ID-only reference.
    pub async fn account_folder(
        &self,
        parent: &DriveFile,
        account_id: &str,
    ) -> DrivePortResult<DriveFile> {
        let _guard = self.op_lock.lock().await;
        let title = account_folder_title(account_id);

        tracing::info!(%title, parent = %parent.id, "Executing find sub-folder query");
        if let Some(child) = self.drive.find_folder(&title, Some(&parent.id)).await? {
            tracing::debug!(id = %child.id, "Found existing account folder");
            return Ok(DriveFile::with_id(child.id));
        }

        tracing::info!(%title, parent = %parent.id, "Creating account folder");
        self.drive
            .create_folder(&account_folder_spec(&parent.id, account_id))
            .await
    }

    /// Fetch a file by ID.
    pub async fn file_by_id(&self, file_id: &str) -> DrivePortResult<DriveFile> {
        let _guard = self.op_lock.lock().await;
        self.drive.get_file(file_id).await
    }
}
