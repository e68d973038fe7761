//! Service account tokens via the OAuth 2.0 JWT bearer grant.
//!
//! The provider signs an RS256 assertion with the service account's private
//! key and exchanges it at the token endpoint. Tokens are cached in memory and
//! refreshed before expiration.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reportdrive_core::ServiceAccountKey;
use serde::{Deserialize, Serialize};

use super::cache::TokenCache;
use super::{TokenProvider, TokenResponse, request_token};
use crate::error::DriveResult;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Lifetime requested for the assertion (Google's maximum).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

/// Service account based token provider with in-memory caching.
pub struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    subject: Option<String>,
    scopes: Vec<String>,
    token_uri: String,
    http: reqwest::Client,
    cache: TokenCache,
}

impl ServiceAccountTokenProvider {
    /// Create a new provider.
    ///
    /// `default_token_uri` is used unless the key names its own endpoint.
    /// `subject` is an optional user to impersonate.
    pub fn new(
        key: ServiceAccountKey,
        subject: Option<String>,
        scopes: Vec<String>,
        default_token_uri: String,
        http: reqwest::Client,
    ) -> Self {
        let token_uri = key.token_uri.clone().unwrap_or(default_token_uri);
        Self {
            key,
            subject,
            scopes,
            token_uri,
            http,
            cache: TokenCache::new(),
        }
    }

    fn claims(&self, now: i64) -> Claims {
        Claims {
            iss: self.key.client_email.clone(),
            scope: self.scopes.join(" "),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
            sub: self.subject.clone(),
        }
    }

    /// Sign the JWT assertion for the token request.
    pub(crate) fn assertion(&self, now: i64) -> DriveResult<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid.clone_from(&self.key.private_key_id);
        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(encode(&header, &self.claims(now), &key)?)
    }

    async fn fetch(&self) -> DriveResult<TokenResponse> {
        tracing::info!(
            client_email = %self.key.client_email,
            subject = ?self.subject,
            "Requesting service account access token"
        );
        let assertion = self.assertion(Utc::now().timestamp())?;
        let form = [
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ];
        request_token(&self.http, &self.token_uri, &form).await
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> DriveResult<String> {
        self.cache.get_or_fetch(|| self.fetch()).await
    }
}
