//! Google Drive (REST API v2) adapter for reportdrive.
//!
//! Implements the core `DriveClientPort` over reqwest, authenticating with an
//! access token, a refresh token or a service account key. Use
//! [`GoogleDriveFactory`] with `reportdrive_core::ReportFolderRegistry` to get
//! one cached client per credential.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultDriveClient is meant to be used
// through the DriveClientPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod auth;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod query;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultDriveClient;

// Configuration
pub use config::DriveClientConfig;

// Factory for the core registry
pub use port::GoogleDriveFactory;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
