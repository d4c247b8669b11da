//! Moka in-memory cache provider
//!
//! Bounded, concurrent in-memory cache. The bound counts entries, not bytes.
//! Each entry carries its own TTL through a Moka [`Expiry`] policy.
//!
//! ## Example
//!
//! ```ignore
//! use switchboard_providers::cache::MokaCacheProvider;
//!
//! let provider = MokaCacheProvider::with_capacity(100);
//! ```

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use switchboard_domain::constants::MEMORY_CACHE_DEFAULT_MAX_SIZE;
use switchboard_domain::error::Result;
use switchboard_domain::ports::CacheProvider;

/// Stored value plus the TTL requested when it was written
#[derive(Clone)]
struct CachedValue {
    bytes: Arc<[u8]>,
    ttl: Option<Duration>,
}

/// Expire each entry after its own TTL; rewriting an entry restarts the clock
struct PerEntryExpiry;

impl Expiry<String, CachedValue> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based in-memory cache provider
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CachedValue>,
    max_size: u64,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CACHE_DEFAULT_MAX_SIZE)
    }

    /// Create a new Moka cache provider holding at most `max_size` entries
    pub fn with_capacity(max_size: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_size)
            .expire_after(PerEntryExpiry)
            .build();

        Self { cache, max_size }
    }

    /// Get the maximum number of entries
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Number of live entries, after flushing pending maintenance
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cache.get(key).await.map(|value| value.bytes.to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let entry = CachedValue {
            bytes: Arc::from(value),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_size", &self.max_size)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
