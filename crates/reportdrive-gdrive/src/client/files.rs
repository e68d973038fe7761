//! File metadata fetches.

use crate::error::DriveResult;
use crate::http::HttpBackend;
use crate::models::ApiFile;
use crate::url::build_file_url;

use super::DriveClient;

impl<B: HttpBackend> DriveClient<B> {
    /// Fetch a file's metadata.
    pub(crate) async fn fetch_file(&self, file_id: &str) -> DriveResult<ApiFile> {
        let url = build_file_url(&self.config, file_id);
        self.backend.get_json(&url).await
    }
}
