//! In-memory Drive for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reportdrive_core::{
    DriveClientFactory, DriveClientPort, DriveCredential, DriveFile, DrivePortError,
    DrivePortResult, FOLDER_MIME_TYPE, FolderSpec, ReportFolderRegistry,
};

use crate::bootstrap::CliContext;

#[derive(Default)]
pub struct FakeDrive {
    files: Mutex<Vec<DriveFile>>,
    created: Mutex<Vec<FolderSpec>>,
}

impl FakeDrive {
    pub fn created(&self) -> Vec<FolderSpec> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl DriveClientPort for FakeDrive {
    async fn find_folder(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> DrivePortResult<Option<DriveFile>> {
        let files = self.files.lock().unwrap();
        Ok(files
            .iter()
            .find(|f| {
                f.title.as_deref() == Some(title)
                    && parent_id.is_none_or(|p| f.parent_ids.iter().any(|id| id == p))
            })
            .cloned())
    }

    async fn create_folder(&self, spec: &FolderSpec) -> DrivePortResult<DriveFile> {
        let mut created = self.created.lock().unwrap();
        created.push(spec.clone());
        let file = DriveFile {
            id: format!("created-{}", created.len()),
            title: Some(spec.title.clone()),
            mime_type: Some(FOLDER_MIME_TYPE.to_string()),
            description: Some(spec.description.clone()),
            parent_ids: spec.parent_id.iter().cloned().collect(),
            ..Default::default()
        };
        self.files.lock().unwrap().push(file.clone());
        Ok(file)
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

struct FakeFactory(Arc<FakeDrive>);

impl DriveClientFactory for FakeFactory {
    fn create(&self, _credential: &DriveCredential) -> DrivePortResult<Arc<dyn DriveClientPort>> {
        Ok(Arc::clone(&self.0) as Arc<dyn DriveClientPort>)
    }
}

pub fn fake() -> Arc<FakeDrive> {
    Arc::new(FakeDrive::default())
}

pub fn context_with(drive: &Arc<FakeDrive>) -> CliContext {
    let registry = ReportFolderRegistry::new(Arc::new(FakeFactory(Arc::clone(drive))));
    CliContext::new(registry, DriveCredential::access_token("test"))
}
