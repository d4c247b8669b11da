//! Cache Provider Port
//!
//! Port for key/value cache backends. Implementations live in
//! `switchboard-providers` (in-memory Moka, distributed Redis, null).
//! The configuration layer only selects and constructs them.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key/value cache capability
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
///
/// let cache = config.cache.instance().await?;
/// cache.set("session:42", b"{}", Some(Duration::from_secs(60))).await?;
/// let value = cache.get("session:42").await?;
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Get a value, `None` on miss or expiry
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value; `ttl = None` keeps it until evicted or deleted
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Delete a value, returning whether the key existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key is present
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "memory", "redis", "null")
    fn provider_name(&self) -> &str;
}
