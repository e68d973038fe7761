//! Core domain types, ports and services for reportdrive.
//!
//! This crate knows the report folder conventions and how to look up or
//! create them through [`DriveClientPort`]. It contains no HTTP code; the
//! Google Drive adapter lives in `reportdrive-gdrive`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DriveCredential, DriveFile, FOLDER_MIME_TYPE, FolderSpec, ServiceAccountKey,
    account_folder_spec, account_folder_title, reports_folder_spec, reports_folder_title,
};
pub use ports::{DriveClientFactory, DriveClientPort, DrivePortError, DrivePortResult};
pub use services::{ReportFolderRegistry, ReportFolderService};
