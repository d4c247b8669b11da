//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | No-op stub for testing |
//! | [`MokaCacheProvider`] | Local | Bounded in-memory cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed for multi-instance |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use self::moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use self::redis::{RedisCacheProvider, RedisConnectionOptions};
