//! Installed-application OAuth2 credentials (refresh token grant).

use async_trait::async_trait;

use super::cache::TokenCache;
use super::{TokenProvider, request_token};
use crate::error::DriveResult;

/// Exchanges a long-lived refresh token for short-lived access tokens.
pub struct RefreshTokenProvider {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_uri: String,
    http: reqwest::Client,
    cache: TokenCache,
}

impl RefreshTokenProvider {
    /// Create a new provider. `http` can be a shared reqwest client.
    pub fn new(
        client_id: String,
        client_secret: String,
        refresh_token: String,
        token_uri: String,
        http: reqwest::Client,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            refresh_token,
            token_uri,
            http,
            cache: TokenCache::new(),
        }
    }

    async fn fetch(&self) -> DriveResult<super::TokenResponse> {
        tracing::info!(client_id = %self.client_id, "Refreshing OAuth access token");
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
        ];
        request_token(&self.http, &self.token_uri, &form).await
    }
}

#[async_trait]
impl TokenProvider for RefreshTokenProvider {
    async fn access_token(&self) -> DriveResult<String> {
        self.cache.get_or_fetch(|| self.fetch()).await
    }
}
