//! Connection sources.
//!
//! An accessor never owns a connection. It asks its source for one per
//! logical operation, which is either:
//!
//! | Source | Acquisition | Release |
//! |--------|-------------|---------|
//! | [`Direct`] | lock the shared handle | unlock |
//! | [`Pooled`] | checkout, then `SELECT` of the source's database | guard drop |
//!
//! Both release on every exit path, including errors.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use redcoll_core::{Connection, ConnectionPool, Result};
use tracing::trace;

/// Supplies a connection for the duration of one operation.
pub trait ConnectionSource {
    /// Connection type handed to operations
    type Connection: Connection;

    /// Run `f` with a connection held for its whole duration.
    ///
    /// Everything `f` issues goes over the same connection, so a multi-command
    /// operation sees one consistent database selection.
    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self::Connection) -> Result<T>;
}

/// A single handle shared by every accessor built from it.
///
/// Operations on the handle are serialized by a mutex. The caller decides
/// when the handle is opened and closed; redcoll never reconnects it.
pub struct Direct<C> {
    conn: Arc<Mutex<C>>,
}

impl<C> Direct<C> {
    /// Share `conn` between accessors.
    pub fn new(conn: C) -> Self {
        Self::from_shared(Arc::new(Mutex::new(conn)))
    }

    /// Use a handle the caller already shares.
    pub fn from_shared(conn: Arc<Mutex<C>>) -> Self {
        Self { conn }
    }

    /// The shared handle.
    pub fn shared(&self) -> &Arc<Mutex<C>> {
        &self.conn
    }
}

impl<C> Clone for Direct<C> {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

impl<C> fmt::Debug for Direct<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Direct").finish_non_exhaustive()
    }
}

impl<C: Connection> ConnectionSource for Direct<C> {
    type Connection = C;

    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut C) -> Result<T>,
    {
        let mut conn = self.conn.lock();
        f(&mut *conn)
    }
}

/// A pool plus the database every checkout selects.
///
/// Pooled connections keep whatever database their previous borrower
/// switched to, so the source selects its own on every checkout.
pub struct Pooled<P> {
    pool: Arc<P>,
    database: u32,
}

impl<P> Pooled<P> {
    /// Check out from `pool`, selecting `database` each time.
    pub fn new(pool: Arc<P>, database: u32) -> Self {
        Self { pool, database }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &Arc<P> {
        &self.pool
    }

    /// Database selected on checkout.
    pub fn database(&self) -> u32 {
        self.database
    }

    /// Same pool, different database.
    pub fn with_database(&self, database: u32) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            database,
        }
    }
}

impl<P> Clone for Pooled<P> {
    fn clone(&self) -> Self {
        self.with_database(self.database)
    }
}

impl<P> fmt::Debug for Pooled<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pooled")
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl<P: ConnectionPool> ConnectionSource for Pooled<P> {
    type Connection = P::Connection;

    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut P::Connection) -> Result<T>,
    {
        // The guard goes back to the pool when it drops, on every path out.
        let mut conn = self.pool.checkout()?;
        trace!(database = self.database, "selecting database on pooled connection");
        conn.select(self.database)?;
        f(&mut *conn)
    }
}
