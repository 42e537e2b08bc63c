//! Pooled connections.
//!
//! Pooling itself is `r2d2`'s job. This module only defines the checkout
//! contract the collection facade relies on and the configuration used to
//! build an `r2d2::Pool` for any backend's connection manager.
//!
//! A checked-out connection is an RAII guard: dropping it returns the
//! connection to the pool, so release happens on every exit path.

use std::ops::DerefMut;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::connection::Connection;
use crate::error::{Error, Result};

/// A thread-safe source of pooled connections.
pub trait ConnectionPool: Send + Sync {
    /// Connection type handed out by the pool
    type Connection: Connection;

    /// Guard that returns the connection to the pool when dropped
    type Pooled: DerefMut<Target = Self::Connection>;

    /// Check out one connection.
    ///
    /// Fails with [`Error::Connectivity`] when the pool is exhausted for
    /// longer than its timeout or the store cannot be reached.
    fn checkout(&self) -> Result<Self::Pooled>;
}

impl<M> ConnectionPool for r2d2::Pool<M>
where
    M: r2d2::ManageConnection,
    M::Connection: Connection,
{
    type Connection = M::Connection;
    type Pooled = r2d2::PooledConnection<M>;

    fn checkout(&self) -> Result<Self::Pooled> {
        Ok(self.get()?)
    }
}

/// Pool sizing and timeouts.
///
/// Deserializes with defaults for every missing field:
///
/// ```
/// # use redcoll_core::PoolConfig;
/// let config = PoolConfig::default();
/// assert_eq!(config.max_connections, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of connections managed by the pool
    pub max_connections: u32,

    /// Idle connections kept open; `None` keeps `max_connections` open
    pub min_idle: Option<u32>,

    /// How long a checkout waits for a free connection, in milliseconds
    pub connection_timeout_ms: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 8,
            min_idle: None,
            connection_timeout_ms: 5_000,
        }
    }
}

impl PoolConfig {
    /// Set the maximum number of connections.
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Set the number of idle connections to keep open.
    pub fn min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the checkout timeout.
    ///
    /// Stored in whole milliseconds, rounded up so a non-zero timeout
    /// never becomes zero.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        let millis = (timeout.as_nanos() + 999_999) / 1_000_000;
        self.connection_timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// Checkout timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }

    /// Check the values `r2d2` would otherwise panic on.
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(Error::Validation(
                "pool max_connections must be positive".to_string(),
            ));
        }
        if self.connection_timeout_ms == 0 {
            return Err(Error::Validation(
                "pool connection_timeout_ms must be positive".to_string(),
            ));
        }
        if let Some(min_idle) = self.min_idle {
            if min_idle > self.max_connections {
                return Err(Error::Validation(format!(
                    "pool min_idle ({}) exceeds max_connections ({})",
                    min_idle, self.max_connections
                )));
            }
        }
        Ok(())
    }

    /// Build an `r2d2::Pool` for the given connection manager.
    ///
    /// Blocks until the initial idle connections are open, and fails with
    /// [`Error::Connectivity`] if they cannot be opened within the timeout.
    pub fn build_pool<M>(&self, manager: M) -> Result<r2d2::Pool<M>>
    where
        M: r2d2::ManageConnection,
    {
        self.validate()?;
        let pool = r2d2::Pool::builder()
            .max_size(self.max_connections)
            .min_idle(self.min_idle)
            .connection_timeout(self.timeout())
            .build(manager)?;
        debug!(
            max_connections = self.max_connections,
            min_idle = ?self.min_idle,
            timeout_ms = self.connection_timeout_ms,
            "built connection pool"
        );
        Ok(pool)
    }
}
