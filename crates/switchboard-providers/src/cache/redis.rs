//! Redis distributed cache provider
//!
//! Distributed cache backed by Redis, suitable for multi-instance
//! deployments. Construction opens a [`ConnectionManager`], which reconnects
//! on its own and is cheap to clone per command.
//!
//! ## Example
//!
//! ```ignore
//! use switchboard_providers::cache::{RedisCacheProvider, RedisConnectionOptions};
//!
//! let options = RedisConnectionOptions::new("localhost");
//! let provider = RedisCacheProvider::connect(&options).await?;
//! ```

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use reqwest::Url;
use std::time::Duration;
use switchboard_domain::constants::{REDIS_DEFAULT_DATABASE, REDIS_DEFAULT_PORT};
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::CacheProvider;
use switchboard_domain::value_objects::Secret;
use tracing::info;

/// Where and how to reach the Redis server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConnectionOptions {
    /// Server hostname
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database index
    pub database: u32,
    /// Optional password (AUTH)
    pub password: Option<Secret>,
    /// Use TLS (`rediss://`)
    pub ssl: bool,
}

impl RedisConnectionOptions {
    /// Options for `host` with default port and database, TLS enabled
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            port: REDIS_DEFAULT_PORT,
            database: REDIS_DEFAULT_DATABASE,
            password: None,
            ssl: true,
        }
    }

    /// Build the connection URL; the password is percent-encoded
    pub fn connection_url(&self) -> Result<Url> {
        let scheme = if self.ssl { "rediss" } else { "redis" };
        let mut url = Url::parse(&format!(
            "{scheme}://{}:{}/{}",
            self.host, self.port, self.database
        ))
        .map_err(|e| {
            Error::backend_construction_with_source(
                "redis",
                format!("Invalid Redis host '{}'", self.host),
                e,
            )
        })?;

        if let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) {
            url.set_password(Some(password.expose())).map_err(|()| {
                Error::backend_construction("redis", "Cannot attach password to Redis URL")
            })?;
        }

        Ok(url)
    }
}

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    manager: ConnectionManager,
    host: String,
    port: u16,
    database: u32,
    tls: bool,
}

impl RedisCacheProvider {
    /// Connect to Redis
    ///
    /// Fails with [`Error::BackendConstruction`] when the URL is invalid or
    /// the server cannot be reached.
    pub async fn connect(options: &RedisConnectionOptions) -> Result<Self> {
        let url = options.connection_url()?;

        let client = redis::Client::open(url.as_str()).map_err(|e| {
            Error::backend_construction_with_source(
                "redis",
                format!("Failed to create Redis client: {e}"),
                e,
            )
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            Error::backend_construction_with_source(
                "redis",
                format!(
                    "Failed to connect to Redis at {}:{}: {e}",
                    options.host, options.port
                ),
                e,
            )
        })?;

        info!(
            host = %options.host,
            port = options.port,
            database = options.database,
            tls = options.ssl,
            "Connected to Redis"
        );

        Ok(Self {
            manager,
            host: options.host.clone(),
            port: options.port,
            database: options.database,
            tls: options.ssl,
        })
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }

    /// Check if the Redis connection uses TLS
    pub fn is_tls(&self) -> bool {
        self.tls
    }
}

fn command_error(command: &str, e: redis::RedisError) -> Error {
    Error::cache_with_source(format!("Redis {command} failed: {e}"), e)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.manager.clone();
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(|e| command_error("GET", e))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.manager.clone();

        match ttl {
            Some(ttl) => {
                // PSETEX rejects a zero expiry
                let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
                let _: () = conn
                    .pset_ex(key, value, millis)
                    .await
                    .map_err(|e| command_error("PSETEX", e))?;
            }
            None => {
                let _: () = conn
                    .set(key, value)
                    .await
                    .map_err(|e| command_error("SET", e))?;
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.manager.clone();
        let removed: i64 = conn.del(key).await.map_err(|e| command_error("DEL", e))?;
        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.manager.clone();
        let found: bool = conn
            .exists(key)
            .await
            .map_err(|e| command_error("EXISTS", e))?;
        Ok(found)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .field("tls", &self.is_tls())
            .finish()
    }
}
