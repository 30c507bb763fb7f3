//! In-memory cache with per-entry expiry.
//!
//! Entries carry an explicit deadline checked on every read: a value is
//! either fresh or absent, never served past its TTL. An expired entry is
//! purged by the read that finds it.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use vodbridge_core::config::cache::MemoryCacheConfig;
use vodbridge_core::result::AppResult;
use vodbridge_core::traits::cache::CacheProvider;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache provider.
#[derive(Debug)]
pub struct MemoryCacheProvider {
    entries: DashMap<String, Entry>,
    max_capacity: u64,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            max_capacity: config.max_capacity,
        }
    }

    fn evict_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.expires_at > now);
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if entry.expires_at > Instant::now() {
                    return Ok(Some(entry.value.clone()));
                }
                true
            }
            None => false,
        };
        if expired {
            self.entries.remove(key);
            debug!(key, "Purged expired cache entry");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        if self.entries.len() as u64 >= self.max_capacity {
            self.evict_expired();
        }
        // Capacity is a soft bound; under sustained overflow the oldest
        // entries to expire win.
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryCacheProvider {
        MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 16 })
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = store();
        cache
            .set("k", "v", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));
        assert!(cache.exists("k").await.unwrap());

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_entry_expires_and_is_purged() {
        let cache = store();
        cache
            .set("k", "v", Duration::from_millis(20))
            .await
            .unwrap();
        assert!(cache.get("k").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("k").await.unwrap(), None);
        // The expired read removed the entry outright.
        assert!(cache.entries.get("k").is_none());
    }

    #[tokio::test]
    async fn test_overwrite_resets_ttl() {
        let cache = store();
        cache
            .set("k", "old", Duration::from_millis(20))
            .await
            .unwrap();
        cache
            .set("k", "new", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));
    }
}
