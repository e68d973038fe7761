//! Folder search and creation.

use reportdrive_core::{FOLDER_MIME_TYPE, FolderSpec};

use crate::error::DriveResult;
use crate::http::HttpBackend;
use crate::models::{
    ApiChildList, ApiChildReference, ApiFile, ApiFileList, ApiNewFolder, ApiParentReference,
};
use crate::query::folder_title_query;
use crate::url::{build_children_list_url, build_files_insert_url, build_files_list_url};

use super::DriveClient;

impl<B: HttpBackend> DriveClient<B> {
    /// Search the whole drive for non-trashed folders titled `title`.
    ///
    /// Only the first page of results is read.
    pub(crate) async fn find_folders(&self, title: &str) -> DriveResult<Vec<ApiFile>> {
        tracing::debug!(%title, "Building find folder query");
        let url = build_files_list_url(&self.config, &folder_title_query(title));
        let list: ApiFileList = self.backend.get_json(&url).await?;
        tracing::info!(
            results = list.items.len(),
            more_pages = list.next_page_token.is_some(),
            "Number of results from folder query"
        );
        Ok(list.items)
    }

    /// Search the children of `parent_id` for non-trashed folders titled `title`.
    ///
    /// Only the first page of results is read.
    pub(crate) async fn find_child_folders(
        &self,
        parent_id: &str,
        title: &str,
    ) -> DriveResult<Vec<ApiChildReference>> {
        tracing::debug!(%title, parent = %parent_id, "Building find sub-folder query");
        let url = build_children_list_url(&self.config, parent_id, &folder_title_query(title));
        let list: ApiChildList = self.backend.get_json(&url).await?;
        tracing::info!(
            results = list.items.len(),
            more_pages = list.next_page_token.is_some(),
            "Number of results from sub-folder query"
        );
        Ok(list.items)
    }

    /// Insert a folder.
    pub(crate) async fn insert_folder(&self, spec: &FolderSpec) -> DriveResult<ApiFile> {
        let body = ApiNewFolder {
            title: spec.title.clone(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            description: spec.description.clone(),
            parents: spec
                .parent_id
                .iter()
                .map(|id| ApiParentReference { id: id.clone() })
                .collect(),
        };
        tracing::info!(title = %spec.title, "Executing create folder");
        self.backend
            .post_json(&build_files_insert_url(&self.config), &body)
            .await
    }
}
