//! Domain types shared by every adapter.

mod credential;
mod file;
pub mod folders;

pub use credential::{DriveCredential, ServiceAccountKey};
pub use file::{DriveFile, FolderSpec};
pub use folders::{
    FOLDER_MIME_TYPE, account_folder_spec, account_folder_title, reports_folder_spec,
    reports_folder_title,
};
