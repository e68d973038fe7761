//! Core services built on the Drive port.

mod registry;
mod report_folders;

#[cfg(test)]
pub(crate) mod testing;

pub use registry::ReportFolderRegistry;
pub use report_folders::ReportFolderService;
