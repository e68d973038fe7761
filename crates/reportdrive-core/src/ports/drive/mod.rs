//! Drive port definitions.
//!
//! This module defines the port traits for Drive interaction.
//! The actual implementation lives in `reportdrive-gdrive`.

mod client;
mod error;

pub use client::{DriveClientFactory, DriveClientPort};
pub use error::{DrivePortError, DrivePortResult};

#[cfg(test)]
pub use client::MockDriveClientFactory;
