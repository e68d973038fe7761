//! One [`ReportFolderService`] per credential.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::DriveCredential;
use crate::ports::{DriveClientFactory, DrivePortResult};

use super::report_folders::ReportFolderService;

type ServiceMap = HashMap<DriveCredential, Arc<ReportFolderService>>;

/// Lazily builds and caches one service per credential.
///
/// Lookups take a read lock. On a miss the write lock is taken and the map
/// is checked again before the factory runs, so each credential gets at most
/// one service.
pub struct ReportFolderRegistry {
    factory: Arc<dyn DriveClientFactory>,
    services: RwLock<ServiceMap>,
}

impl ReportFolderRegistry {
    /// Create an empty registry backed by `factory`.
    pub fn new(factory: Arc<dyn DriveClientFactory>) -> Self {
        Self {
            factory,
            services: RwLock::new(HashMap::new()),
        }
    }

    /// Get the service for `credential`, building it on first use.
    ///
    /// A factory failure is returned and nothing is cached.
    pub fn service_for(
        &self,
        credential: &DriveCredential,
    ) -> DrivePortResult<Arc<ReportFolderService>> {
        if let Some(service) = self.read().get(credential) {
            return Ok(Arc::clone(service));
        }

        let mut services = self.write();
        if let Some(service) = services.get(credential) {
            return Ok(Arc::clone(service));
        }

        let drive = self.factory.create(credential)?;
        let service = Arc::new(ReportFolderService::new(drive));
        services.insert(credential.clone(), Arc::clone(&service));
        tracing::info!(
            credential = credential.kind(),
            cached = services.len(),
            "Created Drive service"
        );
        Ok(service)
    }

    /// Drop the cached service for `credential`. Returns whether one existed.
    pub fn evict(&self, credential: &DriveCredential) -> bool {
        self.write().remove(credential).is_some()
    }

    /// Number of cached services.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no service has been built yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, ServiceMap> {
        self.services.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ServiceMap> {
        self.services.write().unwrap_or_else(PoisonError::into_inner)
    }
}
