//! Single-flight token cache shared by the fetching providers.

use std::future::Future;

use chrono::Utc;
use tokio::sync::Mutex;

use super::TokenResponse;
use crate::error::DriveResult;

/// Refresh this many seconds before the token expires.
const EXPIRY_SAFETY_WINDOW: i64 = 300;

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    /// Unix timestamp seconds when the token expires
    exp_unix: i64,
}

impl CachedToken {
    const fn is_fresh(&self, now: i64) -> bool {
        self.exp_unix.saturating_sub(EXPIRY_SAFETY_WINDOW) > now
    }
}

/// Holds the current token; the lock is held across a refresh so concurrent
/// callers wait for one fetch instead of issuing their own.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached token, or run `fetch` and cache its result.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> DriveResult<String>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = DriveResult<TokenResponse>> + Send,
    {
        let mut slot = self.slot.lock().await;
        let now = Utc::now().timestamp();
        if let Some(cached) = slot.as_ref().filter(|c| c.is_fresh(now)) {
            return Ok(cached.token.clone());
        }

        let fresh = fetch().await?;
        tracing::debug!(expires_in = fresh.expires_in, "Fetched new access token");
        *slot = Some(CachedToken {
            token: fresh.access_token.clone(),
            exp_unix: now.saturating_add(fresh.expires_in),
        });
        Ok(fresh.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn response(token: &str, expires_in: i64) -> TokenResponse {
        TokenResponse {
            access_token: token.to_string(),
            expires_in,
        }
    }

    #[tokio::test]
    async fn test_fresh_token_is_reused() {
        let cache = TokenCache::new();
        let first = cache
            .get_or_fetch(|| async { Ok(response("one", 3600)) })
            .await
            .unwrap();
        let second = cache
            .get_or_fetch(|| async { Ok(response("two", 3600)) })
            .await
            .unwrap();

        assert_eq!(first, "one");
        assert_eq!(second, "one");
    }

    #[tokio::test]
    async fn test_token_inside_safety_window_is_refreshed() {
        let cache = TokenCache::new();
        cache
            .get_or_fetch(|| async { Ok(response("short", 60)) })
            .await
            .unwrap();
        let next = cache
            .get_or_fetch(|| async { Ok(response("long", 3600)) })
            .await
            .unwrap();

        assert_eq!(next, "long");
    }

    #[tokio::test]
    async fn test_huge_expires_in_does_not_overflow() {
        let cache = TokenCache::new();
        let first = cache
            .get_or_fetch(|| async { Ok(response("forever", i64::MAX)) })
            .await
            .unwrap();
        let second = cache
            .get_or_fetch(|| async { Ok(response("unused", 3600)) })
            .await
            .unwrap();

        assert_eq!(first, "forever");
        assert_eq!(second, "forever");
    }

    #[test]
    fn test_expiry_near_min_is_stale() {
        let cached = CachedToken {
            token: "t".to_string(),
            exp_unix: i64::MIN,
        };
        assert!(!cached.is_fresh(0));
    }

    #[tokio::test]
    async fn test_failed_fetch_caches_nothing() {
        let cache = TokenCache::new();
        let failed = cache
            .get_or_fetch(|| async {
                Err(crate::error::DriveError::InvalidResponse {
                    message: "boom".to_string(),
                })
            })
            .await;
        assert!(failed.is_err());

        let token = cache
            .get_or_fetch(|| async { Ok(response("ok", 3600)) })
            .await
            .unwrap();
        assert_eq!(token, "ok");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_fetch_once() {
        let cache = Arc::new(TokenCache::new());
        let fetches = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let fetches = Arc::clone(&fetches);
                tokio::spawn(async move {
                    cache
                        .get_or_fetch(|| async move {
                            fetches.fetch_add(1, Ordering::SeqCst);
                            tokio::task::yield_now().await;
                            Ok(response("shared", 3600))
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "shared");
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }
}
