//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! credential and connection option can also come from the environment.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Commands;

/// Look up or create AwReporting folders in Google Drive.
#[derive(Parser, Debug)]
#[command(name = "reportdrive")]
#[command(about = "Find or create report folders in Google Drive")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub drive: DriveArgs,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to authenticate. The first complete option wins: access token,
/// then service account key, then refresh token.
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// OAuth2 access token managed outside this tool
    #[arg(long, env = "REPORTDRIVE_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Service account JSON key file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS", global = true)]
    pub service_account_file: Option<PathBuf>,

    /// User to impersonate with the service account (domain-wide delegation)
    #[arg(long, env = "REPORTDRIVE_SUBJECT", global = true)]
    pub subject: Option<String>,

    /// OAuth2 client ID for the refresh token
    #[arg(long, env = "REPORTDRIVE_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// OAuth2 client secret for the refresh token
    #[arg(long, env = "REPORTDRIVE_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// OAuth2 refresh token
    #[arg(long, env = "REPORTDRIVE_REFRESH_TOKEN", hide_env_values = true, global = true)]
    pub refresh_token: Option<String>,
}

/// Drive connection settings.
#[derive(Args, Debug, Clone, Default)]
pub struct DriveArgs {
    /// Drive API base URL
    #[arg(long, env = "REPORTDRIVE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// OAuth2 token endpoint. A service account key that names its own
    /// `token_uri` always uses that one instead
    #[arg(long, env = "REPORTDRIVE_TOKEN_URI", global = true)]
    pub token_uri: Option<String>,

    /// Application name sent to Google
    #[arg(long, env = "REPORTDRIVE_APP_NAME", global = true)]
    pub app_name: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "REPORTDRIVE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}
