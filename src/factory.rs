//! Accessor factory.
//!
//! `Collections` is the entry point: it fixes how connections are acquired
//! and hands out accessors bound to store keys. It performs no I/O itself;
//! the only failures it reports are validation errors.

use std::sync::Arc;

use parking_lot::Mutex;
use redcoll_core::{Connection, ConnectionPool, Error, Result};

use crate::collections::{RedisList, RedisMap, RedisSet};
use crate::source::{ConnectionSource, Direct, Pooled};

/// Factory for map, list and set accessors.
///
/// # Example
///
/// ```ignore
/// use redcoll::prelude::*;
///
/// // One shared connection
/// let collections = Collections::direct(RedisConnection::open("redis://127.0.0.1/")?);
///
/// // A pool, selecting database 2 on every checkout
/// let collections = Collections::builder()
///     .pool(pool)
///     .database(2)
///     .build()?;
///
/// let names = collections.map("user:names")?;
/// let queue = collections.list("jobs")?;
/// let tags = collections.set("tags")?;
/// ```
#[derive(Debug, Clone)]
pub struct Collections<S> {
    source: S,
}

impl<S: ConnectionSource + Clone> Collections<S> {
    /// Use an explicit connection source.
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// The connection source shared by every accessor.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Map accessor for the hash at `key`.
    ///
    /// Fails with [`Error::Validation`] if `key` is empty.
    pub fn map(&self, key: impl Into<String>) -> Result<RedisMap<S>> {
        RedisMap::new(self.source.clone(), key)
    }

    /// List accessor for the list at `key`.
    ///
    /// Fails with [`Error::Validation`] if `key` is empty.
    pub fn list(&self, key: impl Into<String>) -> Result<RedisList<S>> {
        RedisList::new(self.source.clone(), key)
    }

    /// Set accessor for the set at `key`.
    ///
    /// Fails with [`Error::Validation`] if `key` is empty.
    pub fn set(&self, key: impl Into<String>) -> Result<RedisSet<S>> {
        RedisSet::new(self.source.clone(), key)
    }
}

// =============================================================================
// Direct handle
// =============================================================================

impl<C: Connection> Collections<Direct<C>> {
    /// Share one open connection between all accessors.
    ///
    /// The connection stays on whatever database it already uses.
    pub fn direct(conn: C) -> Self {
        Self::from_source(Direct::new(conn))
    }

    /// Use a connection the caller already shares.
    pub fn shared(conn: Arc<Mutex<C>>) -> Self {
        Self::from_source(Direct::from_shared(conn))
    }
}

// =============================================================================
// Pool + database
// =============================================================================

impl<P: ConnectionPool> Collections<Pooled<P>> {
    /// Check a connection out of `pool` for every operation.
    ///
    /// Operations run on database 0; use [`Collections::builder`] or
    /// [`with_database`](Self::with_database) to pick another.
    pub fn pooled(pool: P) -> Self {
        Self::from_source(Pooled::new(Arc::new(pool), 0))
    }

    /// Create a builder for a pooled factory.
    pub fn builder() -> CollectionsBuilder<P> {
        CollectionsBuilder::new()
    }

    /// Database selected on every checkout.
    pub fn database(&self) -> u32 {
        self.source.database()
    }

    /// Same pool, selecting `database` on every checkout.
    pub fn with_database(&self, database: u32) -> Self {
        Self::from_source(self.source.with_database(database))
    }

    /// Map accessor for the hash at `key` in `database`.
    pub fn map_in(&self, database: u32, key: impl Into<String>) -> Result<RedisMap<Pooled<P>>> {
        self.with_database(database).map(key)
    }

    /// List accessor for the list at `key` in `database`.
    pub fn list_in(&self, database: u32, key: impl Into<String>) -> Result<RedisList<Pooled<P>>> {
        self.with_database(database).list(key)
    }

    /// Set accessor for the set at `key` in `database`.
    pub fn set_in(&self, database: u32, key: impl Into<String>) -> Result<RedisSet<Pooled<P>>> {
        self.with_database(database).set(key)
    }
}

/// Builder for a pooled [`Collections`].
///
/// # Example
///
/// ```ignore
/// let collections = Collections::builder()
///     .pool(pool)
///     .database(3)
///     .build()?;
/// ```
pub struct CollectionsBuilder<P> {
    pool: Option<Arc<P>>,
    database: u32,
}

impl<P: ConnectionPool> CollectionsBuilder<P> {
    /// Create a builder with no pool, on database 0.
    pub fn new() -> Self {
        Self {
            pool: None,
            database: 0,
        }
    }

    /// Pool to check connections out of.
    pub fn pool(self, pool: P) -> Self {
        self.shared_pool(Arc::new(pool))
    }

    /// Pool the caller already shares.
    pub fn shared_pool(mut self, pool: Arc<P>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Database to select on every checkout (default 0).
    pub fn database(mut self, database: u32) -> Self {
        self.database = database;
        self
    }

    /// Build the factory.
    ///
    /// Fails with [`Error::Validation`] if no pool was given.
    pub fn build(self) -> Result<Collections<Pooled<P>>> {
        let pool = self
            .pool
            .ok_or_else(|| Error::Validation("a connection pool is required".to_string()))?;
        Ok(Collections::from_source(Pooled::new(pool, self.database)))
    }
}

impl<P: ConnectionPool> Default for CollectionsBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
