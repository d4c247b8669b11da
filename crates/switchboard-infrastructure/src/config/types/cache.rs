//! Cache configuration types
//!
//! ```toml
//! [cache]
//! mode = "redis"
//!
//! [cache.redis]
//! host = "cache.internal"
//! password = "..."
//! ```

use crate::config::mode::{ModeSelector, check_variant, require_slot};
use crate::di::{SingletonFactory, VariantConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use switchboard_domain::constants::{
    MEMORY_CACHE_DEFAULT_MAX_SIZE, MEMORY_CACHE_MIN_SIZE, REDIS_DEFAULT_DATABASE,
    REDIS_DEFAULT_PORT,
};
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::CacheProvider;
use switchboard_domain::value_objects::Secret;
use switchboard_providers::cache::{MokaCacheProvider, RedisCacheProvider, RedisConnectionOptions};
use validator::Validate;

/// Cache backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// In-process memory cache
    #[default]
    Memory,
    /// Redis server
    Redis,
}

impl CacheMode {
    /// Every cache mode
    pub const ALL: [CacheMode; 2] = [CacheMode::Memory, CacheMode::Redis];

    /// Configuration tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory cache block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MemoryConfig {
    /// Maximum number of entries
    #[validate(range(min = MEMORY_CACHE_MIN_SIZE))]
    pub max_size: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_size: MEMORY_CACHE_DEFAULT_MAX_SIZE,
        }
    }
}

#[async_trait]
impl VariantConfig for MemoryConfig {
    type Capability = dyn CacheProvider;

    fn registry() -> &'static SingletonFactory<Self, dyn CacheProvider> {
        static REGISTRY: LazyLock<SingletonFactory<MemoryConfig, dyn CacheProvider>> =
            LazyLock::new(|| SingletonFactory::new("cache.memory"));
        &REGISTRY
    }

    async fn build(&self) -> Result<Arc<dyn CacheProvider>> {
        Ok(Arc::new(MokaCacheProvider::with_capacity(self.max_size)))
    }
}

fn default_redis_port() -> u16 {
    REDIS_DEFAULT_PORT
}

fn default_redis_ssl() -> bool {
    true
}

/// Redis cache block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct RedisConfig {
    /// Database index
    #[serde(default)]
    pub database: u32,
    /// Server hostname
    #[validate(length(min = 1))]
    pub host: String,
    /// Password (AUTH)
    pub password: Secret,
    /// Server port
    #[serde(default = "default_redis_port")]
    pub port: u16,
    /// Use TLS
    #[serde(default = "default_redis_ssl")]
    pub ssl: bool,
}

impl RedisConfig {
    /// Block for `host` with default port and database, TLS enabled
    pub fn new<H: Into<String>>(host: H, password: Secret) -> Self {
        Self {
            database: REDIS_DEFAULT_DATABASE,
            host: host.into(),
            password,
            port: REDIS_DEFAULT_PORT,
            ssl: true,
        }
    }

    /// Connection options for the Redis backend
    pub fn connection_options(&self) -> RedisConnectionOptions {
        RedisConnectionOptions {
            host: self.host.clone(),
            port: self.port,
            database: self.database,
            password: Some(self.password.clone()),
            ssl: self.ssl,
        }
    }
}

#[async_trait]
impl VariantConfig for RedisConfig {
    type Capability = dyn CacheProvider;

    fn registry() -> &'static SingletonFactory<Self, dyn CacheProvider> {
        static REGISTRY: LazyLock<SingletonFactory<RedisConfig, dyn CacheProvider>> =
            LazyLock::new(|| SingletonFactory::new("cache.redis"));
        &REGISTRY
    }

    async fn build(&self) -> Result<Arc<dyn CacheProvider>> {
        let provider = RedisCacheProvider::connect(&self.connection_options()).await?;
        Ok(Arc::new(provider))
    }
}

/// Shape of the `[cache]` section before whole-record validation
#[derive(Deserialize)]
struct CacheConfigData {
    #[serde(default = "default_memory_slot")]
    memory: Option<MemoryConfig>,
    #[serde(default)]
    mode: CacheMode,
    #[serde(default)]
    redis: Option<RedisConfig>,
}

#[allow(clippy::unnecessary_wraps)]
fn default_memory_slot() -> Option<MemoryConfig> {
    Some(MemoryConfig::default())
}

/// Cache section: active mode plus one slot per mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CacheConfigData")]
pub struct CacheConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<MemoryConfig>,
    mode: CacheMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    redis: Option<RedisConfig>,
}

impl CacheConfig {
    /// Build and validate a cache section
    pub fn new(
        mode: CacheMode,
        memory: Option<MemoryConfig>,
        redis: Option<RedisConfig>,
    ) -> Result<Self> {
        let config = Self {
            memory,
            mode,
            redis,
        };
        config.validate()?;
        Ok(config)
    }

    /// Memory mode with the given block
    pub fn memory(memory: MemoryConfig) -> Result<Self> {
        Self::new(CacheMode::Memory, Some(memory), None)
    }

    /// Redis mode with the given block
    pub fn redis(redis: RedisConfig) -> Result<Self> {
        Self::new(CacheMode::Redis, None, Some(redis))
    }

    /// Memory slot
    pub fn memory_config(&self) -> Option<&MemoryConfig> {
        self.memory.as_ref()
    }

    /// Redis slot
    pub fn redis_config(&self) -> Option<&RedisConfig> {
        self.redis.as_ref()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            memory: Some(MemoryConfig::default()),
            mode: CacheMode::Memory,
            redis: None,
        }
    }
}

impl TryFrom<CacheConfigData> for CacheConfig {
    type Error = Error;

    fn try_from(data: CacheConfigData) -> Result<Self> {
        Self::new(data.mode, data.memory, data.redis)
    }
}

#[async_trait]
impl ModeSelector for CacheConfig {
    type Mode = CacheMode;
    type Capability = dyn CacheProvider;

    fn mode(&self) -> CacheMode {
        self.mode
    }

    fn validate(&self) -> Result<()> {
        for mode in CacheMode::ALL {
            match mode {
                CacheMode::Memory => {
                    require_slot(self.memory.as_ref(), mode, self.mode, "Memory")?;
                }
                CacheMode::Redis => {
                    require_slot(self.redis.as_ref(), mode, self.mode, "Redis")?;
                }
            }
        }

        if let Some(memory) = &self.memory {
            check_variant("memory", memory)?;
        }
        if let Some(redis) = &self.redis {
            check_variant("redis", redis)?;
        }
        Ok(())
    }

    async fn instance(&self) -> Result<Arc<dyn CacheProvider>> {
        match self.mode {
            CacheMode::Memory => {
                let Some(memory) = &self.memory else {
                    return Err(Error::internal("validated cache config without memory slot"));
                };
                memory.instance().await
            }
            CacheMode::Redis => {
                let Some(redis) = &self.redis else {
                    return Err(Error::internal("validated cache config without redis slot"));
                };
                redis.instance().await
            }
        }
    }
}
