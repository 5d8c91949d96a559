//! In-memory access token cache
//!
//! Owned by the Mapbox adapter instance. Tokens are refreshed lazily: a
//! token within `EXPIRY_BUFFER` of its expiry reads as absent, prompting
//! the adapter to exchange a fresh one. Concurrent requests may race to
//! refresh; duplicate exchanges are idempotent and the last writer wins.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Tokens this close to expiry are refreshed early
pub(crate) const EXPIRY_BUFFER: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CachedToken {
    secret: String,
    /// None for statically configured tokens, which never expire
    expires_at: Option<Instant>,
}

/// Lazily refreshed single-token cache
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    /// An empty cache; the first `current()` call will miss
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-filled with a non-expiring token
    #[must_use]
    pub fn preloaded(secret: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(CachedToken {
                secret: secret.into(),
                expires_at: None,
            })),
        }
    }

    /// The cached token, unless absent or within the expiry buffer
    pub async fn current(&self) -> Option<String> {
        let slot = self.slot.read().await;
        let cached = slot.as_ref()?;
        match cached.expires_at {
            Some(expires_at) if expires_at.saturating_duration_since(Instant::now())
                <= EXPIRY_BUFFER =>
            {
                None
            },
            _ => Some(cached.secret.clone()),
        }
    }

    /// Store a freshly exchanged token with its time-to-live
    pub async fn store(&self, secret: impl Into<String>, ttl: Duration) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedToken {
            secret: secret.into(),
            expires_at: Some(Instant::now() + ttl),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = TokenCache::new();
        assert!(cache.current().await.is_none());
    }

    #[tokio::test]
    async fn test_preloaded_token_never_expires() {
        let cache = TokenCache::preloaded("pk.static");
        assert_eq!(cache.current().await.as_deref(), Some("pk.static"));
    }

    #[tokio::test]
    async fn test_stored_token_is_returned_before_expiry() {
        let cache = TokenCache::new();
        cache
            .store("tk.fresh", Duration::from_secs(3600))
            .await;
        assert_eq!(cache.current().await.as_deref(), Some("tk.fresh"));
    }

    #[tokio::test]
    async fn test_token_within_buffer_reads_as_absent() {
        let cache = TokenCache::new();
        // ttl below the buffer: immediately due for refresh
        cache.store("tk.stale", Duration::from_secs(30)).await;
        assert!(cache.current().await.is_none());
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let cache = TokenCache::new();
        cache.store("tk.first", Duration::from_secs(3600)).await;
        cache.store("tk.second", Duration::from_secs(3600)).await;
        assert_eq!(cache.current().await.as_deref(), Some("tk.second"));
    }
}
