//! Redis connection configuration.

use redcoll_core::{Error, PoolConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::connection::open_client;
use crate::manager::RedisConnectionManager;

/// URL used when none is configured.
pub const DEFAULT_URL: &str = "redis://127.0.0.1:6379/";

/// A pool of Redis connections.
pub type RedisPool = r2d2::Pool<RedisConnectionManager>;

/// Where and how to connect.
///
/// Every field has a default, so partial configuration deserializes:
///
/// ```json
/// { "url": "redis://cache:6379/", "database": 2, "pool": { "max_connections": 16 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Server URL (`redis://[user:password@]host[:port][/db]`)
    pub url: String,

    /// Database every pooled operation selects; `None` uses the one in
    /// `url` (0 if the URL names none)
    pub database: Option<u32>,

    /// Pool sizing and timeouts
    pub pool: PoolConfig,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: None,
            pool: PoolConfig::default(),
        }
    }
}

impl RedisConfig {
    /// Configuration for `url` with default database and pool settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Select `database` for every pooled operation.
    pub fn database(mut self, database: u32) -> Self {
        self.database = Some(database);
        self
    }

    /// Replace the pool settings.
    pub fn pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Database pooled operations run on: `database` if set, else the one
    /// named by `url`.
    ///
    /// Fails with [`Error::Validation`](redcoll_core::Error::Validation) for
    /// a malformed URL or a database index outside `u32`.
    pub fn resolved_database(&self) -> Result<u32> {
        if let Some(database) = self.database {
            return Ok(database);
        }
        let db = open_client(&self.url)?.get_connection_info().redis.db;
        u32::try_from(db)
            .map_err(|_| Error::Validation(format!("invalid redis database index: {}", db)))
    }

    /// Build a connection pool.
    ///
    /// A malformed URL or pool setting is a validation error and no
    /// connection is attempted; an unreachable server is a connectivity
    /// error.
    pub fn open_pool(&self) -> Result<RedisPool> {
        self.pool.validate()?;
        let client = open_client(&self.url)?;
        debug!(database = ?self.database, "opening redis pool");
        self.pool.build_pool(RedisConnectionManager::new(client))
    }
}
