//! URL construction helpers for the Drive v2 API.
//!
//! Pure functions so every call builds URLs the same way.

use crate::models::DriveConfig;
use url::Url;

fn with_path(config: &DriveConfig, suffix: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{suffix}"));
    url
}

/// `files.list` filtered by `q`.
pub fn build_files_list_url(config: &DriveConfig, q: &str) -> Url {
    let mut url = with_path(config, "files");
    url.query_pairs_mut().append_pair("q", q);
    url
}

/// `children.list` of `parent_id` filtered by `q`.
pub fn build_children_list_url(config: &DriveConfig, parent_id: &str, q: &str) -> Url {
    let mut url = with_path(
        config,
        &format!("files/{}/children", urlencoding::encode(parent_id)),
    );
    url.query_pairs_mut().append_pair("q", q);
    url
}

/// `files.get` for one file.
pub fn build_file_url(config: &DriveConfig, file_id: &str) -> Url {
    with_path(config, &format!("files/{}", urlencoding::encode(file_id)))
}

/// `files.insert` (metadata only).
pub fn build_files_insert_url(config: &DriveConfig) -> Url {
    with_path(config, "files")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> DriveConfig {
        DriveConfig::default()
    }

    #[test]
    fn test_build_files_list_url() {
        let url = build_files_list_url(&default_config(), "title = 'a b'");
        assert_eq!(url.path(), "/drive/v2/files");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "q");
        assert_eq!(value, "title = 'a b'");
    }

    #[test]
    fn test_build_children_list_url() {
        let url = build_children_list_url(&default_config(), "0Bparent", "trashed = false");
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/drive/v2/files/0Bparent/children?q=trashed+%3D+false"
        );
    }

    #[test]
    fn test_build_file_url_encodes_id() {
        let url = build_file_url(&default_config(), "a/b c");
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/drive/v2/files/a%2Fb%20c"
        );
    }

    #[test]
    fn test_build_files_insert_url() {
        assert_eq!(
            build_files_insert_url(&default_config()).as_str(),
            "https://www.googleapis.com/drive/v2/files"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = DriveConfig {
            base_url: Url::parse("http://127.0.0.1:9000/drive/v2/").unwrap(),
            ..DriveConfig::default()
        };
        assert_eq!(
            build_file_url(&config, "x").as_str(),
            "http://127.0.0.1:9000/drive/v2/files/x"
        );
    }
}
