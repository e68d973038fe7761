//! In-memory Drive double shared by the service tests.

use crate::domain::{DriveFile, FOLDER_MIME_TYPE, FolderSpec};
use crate::ports::{DriveClientPort, DrivePortError, DrivePortResult};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fake drive holding folders in memory and counting calls.
#[derive(Default)]
pub struct FakeDrive {
    files: Mutex<Vec<DriveFile>>,
    next_id: AtomicUsize,
    pub find_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl FakeDrive {
    pub fn with_files(files: Vec<DriveFile>) -> Self {
        Self {
            files: Mutex::new(files),
            ..Default::default()
        }
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn finds(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn files(&self) -> Vec<DriveFile> {
        self.files.lock().unwrap().clone()
    }
}

pub fn folder(id: &str, title: &str, parent: Option<&str>) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        title: Some(title.to_string()),
        mime_type: Some(FOLDER_MIME_TYPE.to_string()),
        parent_ids: parent.map(|p| vec![p.to_string()]).unwrap_or_default(),
        trashed: Some(false),
        ..Default::default()
    }
}

#[async_trait]
impl DriveClientPort for FakeDrive {
    async fn find_folder(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> DrivePortResult<Option<DriveFile>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to interleave.
        tokio::task::yield_now().await;

        let files = self.files.lock().unwrap();
        let found = files.iter().find(|f| {
            f.is_folder()
                && f.trashed != Some(true)
                && f.title.as_deref() == Some(title)
                && parent_id.is_none_or(|p| f.parent_ids.iter().any(|id| id == p))
        });
        Ok(found.map(|f| match parent_id {
            Some(_) => DriveFile::with_id(f.id.clone()),
            None => f.clone(),
        }))
    }

    async fn create_folder(&self, spec: &FolderSpec) -> DrivePortResult<DriveFile> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let id = format!("folder-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut created = folder(&id, &spec.title, spec.parent_id.as_deref());
        created.description = Some(spec.description.clone());
        self.files.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_file(&self, file_id: &str) -> DrivePortResult<DriveFile> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == file_id)
            .cloned()
            .ok_or_else(|| DrivePortError::NotFound {
                file_id: file_id.to_string(),
            })
    }
}
