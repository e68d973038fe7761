//! OAuth2 bearer token providers.
//!
//! Every Drive request asks its [`TokenProvider`] for a token. Providers
//! that talk to the token endpoint cache the token and refresh it shortly
//! before it expires.

mod cache;
mod refresh;
mod service_account;

use std::sync::Arc;

use async_trait::async_trait;
use reportdrive_core::DriveCredential;
use serde::Deserialize;

use crate::error::{DriveError, DriveResult};
use crate::models::DriveConfig;

pub use refresh::RefreshTokenProvider;
pub use service_account::ServiceAccountTokenProvider;

/// Supplies tokens for the `Authorization: Bearer <token>` header.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a currently valid access token.
    async fn access_token(&self) -> DriveResult<String>;
}

/// Token managed outside this crate; returned as is.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Create a new static token provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> DriveResult<String> {
        Ok(self.token.clone())
    }
}

/// Pick the provider matching a credential.
pub fn provider_for(
    credential: &DriveCredential,
    config: &DriveConfig,
    http: reqwest::Client,
) -> Arc<dyn TokenProvider> {
    match credential {
        DriveCredential::AccessToken(token) => Arc::new(StaticTokenProvider::new(token.clone())),
        DriveCredential::RefreshToken {
            client_id,
            client_secret,
            refresh_token,
        } => Arc::new(RefreshTokenProvider::new(
            client_id.clone(),
            client_secret.clone(),
            refresh_token.clone(),
            config.token_uri.clone(),
            http,
        )),
        DriveCredential::ServiceAccount { key, subject } => {
            Arc::new(ServiceAccountTokenProvider::new(
                key.clone(),
                subject.clone(),
                config.scopes.clone(),
                config.token_uri.clone(),
                http,
            ))
        }
    }
}

/// Successful token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

const fn default_expires_in() -> i64 {
    3600
}

/// OAuth error response: `{"error": "invalid_grant", "error_description": "..."}`.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// POST a form to the token endpoint and parse the token.
pub(crate) async fn request_token(
    http: &reqwest::Client,
    token_uri: &str,
    form: &[(&str, &str)],
) -> DriveResult<TokenResponse> {
    let response = http.post(token_uri).form(form).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<OAuthErrorResponse>(&body).map_or_else(
            |_| body.trim().to_string(),
            |e| match e.error_description {
                Some(description) => format!("{}: {description}", e.error),
                None => e.error,
            },
        );
        return Err(DriveError::TokenRequestFailed {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
