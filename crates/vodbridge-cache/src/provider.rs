//! Cache manager facade.

use std::time::Duration;

use async_trait::async_trait;

use vodbridge_core::config::cache::CacheConfig;
use vodbridge_core::result::AppResult;
use vodbridge_core::traits::cache::CacheProvider;

use crate::memory::MemoryCacheProvider;

/// Front for the configured cache backend.
///
/// Services hold an `Arc<CacheManager>` and use the [`CacheProvider`]
/// methods (including the typed JSON helpers) without caring which
/// backend is behind it.
#[derive(Debug)]
pub struct CacheManager {
    backend: MemoryCacheProvider,
}

impl CacheManager {
    /// Build the cache backend selected by configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            backend: MemoryCacheProvider::new(&config.memory),
        }
    }
}

#[async_trait]
impl CacheProvider for CacheManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.backend.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.backend.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.backend.delete(key).await
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.backend.exists(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.backend.health_check().await
    }
}
