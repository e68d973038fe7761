//! HTTP backend abstraction for the Drive API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and authenticates every request with a bearer token.
//! Failed requests are not retried.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::{DriveError, DriveResult};
use crate::models::{ApiErrorResponse, DriveConfig};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the Drive API.
///
/// This is an implementation detail - external code should use the
/// `DriveClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> DriveResult<T>;

    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> DriveResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ReqwestBackend {
    /// Create a backend sharing `client` and authenticating with `tokens`.
    pub fn new(client: reqwest::Client, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { client, tokens }
    }

    /// Build the shared reqwest client for a configuration.
    pub fn build_client(config: &DriveConfig) -> DriveResult<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?)
    }

    /// Authenticate and send a request; non-2xx statuses become errors.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> DriveResult<reqwest::Response> {
        let token = self.tokens.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %url, "Drive API request failed");
        Err(DriveError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
            message: error_message(&body, status),
        })
    }
}

/// Extract the message from a Google JSON error body.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> DriveResult<T> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> DriveResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let request = self.client.post(url.as_str()).json(body);
        let response = self.send(request, url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
