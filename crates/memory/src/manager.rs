//! `r2d2` connection manager for [`MemoryStore`].

use std::sync::Arc;

use redcoll_core::{Error, Result};

use crate::connection::MemoryConnection;
use crate::store::MemoryStore;

/// A pool of memory connections.
pub type MemoryPool = r2d2::Pool<MemoryConnectionManager>;

/// Hands out [`MemoryConnection`]s to an `r2d2::Pool`.
///
/// Connecting fails while the store is offline; health checks never count
/// as commands.
#[derive(Debug, Clone)]
pub struct MemoryConnectionManager {
    store: Arc<MemoryStore>,
}

impl MemoryConnectionManager {
    /// Create a manager for the given store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl r2d2::ManageConnection for MemoryConnectionManager {
    type Connection = MemoryConnection;
    type Error = Error;

    fn connect(&self) -> Result<MemoryConnection> {
        self.store.ensure_online()?;
        Ok(self.store.connect())
    }

    fn is_valid(&self, _conn: &mut MemoryConnection) -> Result<()> {
        self.store.ensure_online()
    }

    fn has_broken(&self, _conn: &mut MemoryConnection) -> bool {
        false
    }
}
