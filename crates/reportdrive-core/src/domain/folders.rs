//! Naming conventions for the report folders.

use super::file::FolderSpec;

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Title prefix of the top-level reports folder of a manager account.
pub const REPORTS_FOLDER_PREFIX: &str = "AW Reports - AdWords generated Reports";

/// Title prefix of a per-account sub-folder.
pub const ACCOUNT_FOLDER_PREFIX: &str = "Account ID#";

const REPORTS_FOLDER_DESCRIPTION: &str = "Contains AdWords Reports generated by AwReporting";

/// Title of the reports folder for a manager account.
pub fn reports_folder_title(mcc_account_id: &str) -> String {
    format!("{REPORTS_FOLDER_PREFIX}: {mcc_account_id}")
}

/// Title of the sub-folder for a single account.
pub fn account_folder_title(account_id: &str) -> String {
    format!("{ACCOUNT_FOLDER_PREFIX}: {account_id}")
}

/// Folder to create when a manager account has no reports folder yet.
pub fn reports_folder_spec(mcc_account_id: &str) -> FolderSpec {
    FolderSpec {
        title: reports_folder_title(mcc_account_id),
        description: REPORTS_FOLDER_DESCRIPTION.to_string(),
        parent_id: None,
    }
}

/// Folder to create under `parent_id` when an account has no sub-folder yet.
pub fn account_folder_spec(parent_id: &str, account_id: &str) -> FolderSpec {
    FolderSpec {
        title: account_folder_title(account_id),
        description: format!("AdWords Reports generated by AwReporting for account# {account_id}"),
        parent_id: Some(parent_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_folder_title() {
        assert_eq!(
            reports_folder_title("123-456-7890"),
            "AW Reports - AdWords generated Reports: 123-456-7890"
        );
    }

    #[test]
    fn test_account_folder_title() {
        assert_eq!(account_folder_title("555"), "Account ID#: 555");
    }

    #[test]
    fn test_reports_folder_spec_is_top_level() {
        let spec = reports_folder_spec("42");
        assert_eq!(spec.title, "AW Reports - AdWords generated Reports: 42");
        assert_eq!(
            spec.description,
            "Contains AdWords Reports generated by AwReporting"
        );
        assert!(spec.parent_id.is_none());
    }

    #[test]
    fn test_account_folder_spec_has_parent() {
        let spec = account_folder_spec("parent-id", "777");
        assert_eq!(spec.title, "Account ID#: 777");
        assert_eq!(
            spec.description,
            "AdWords Reports generated by AwReporting for account# 777"
        );
        assert_eq!(spec.parent_id.as_deref(), Some("parent-id"));
    }
}
