//! Sharded in-memory keyspace
//!
//! One shard per database index, stored in a `DashMap`. A command locks only
//! the shard of the database it targets, so each command is atomic and
//! commands on different databases never contend.
//!
//! Within a shard, keys map to typed entries (hash, list or set). Collection
//! entries that become empty are removed, and a command against a key of
//! another type is rejected, as the store does.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use redcoll_core::{Error, PoolConfig, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::connection::MemoryConnection;
use crate::manager::{MemoryConnectionManager, MemoryPool};

/// Number of databases a store exposes unless configured otherwise.
pub const DEFAULT_DATABASES: u32 = 16;

const WRONG_TYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

/// A typed value stored at a key
#[derive(Debug, Clone)]
pub(crate) enum Entry {
    Hash(FxHashMap<String, String>),
    List(VecDeque<String>),
    Set(FxHashSet<String>),
}

impl Entry {
    fn is_empty(&self) -> bool {
        match self {
            Entry::Hash(h) => h.is_empty(),
            Entry::List(l) => l.is_empty(),
            Entry::Set(s) => s.is_empty(),
        }
    }
}

fn wrong_type() -> Error {
    Error::Command(WRONG_TYPE.to_string())
}

/// Typed views over a shard entry: shared read, existing mutable, and
/// mutable-or-create.
macro_rules! typed_access {
    ($read:ident, $existing:ident, $create:ident, $variant:ident, $ty:ty) => {
        pub(crate) fn $read(&self, key: &str) -> Result<Option<&$ty>> {
            match self.data.get(key) {
                None => Ok(None),
                Some(Entry::$variant(v)) => Ok(Some(v)),
                Some(_) => Err(wrong_type()),
            }
        }

        pub(crate) fn $existing(&mut self, key: &str) -> Result<Option<&mut $ty>> {
            match self.data.get_mut(key) {
                None => Ok(None),
                Some(Entry::$variant(v)) => Ok(Some(v)),
                Some(_) => Err(wrong_type()),
            }
        }

        pub(crate) fn $create(&mut self, key: &str) -> Result<&mut $ty> {
            let entry = self
                .data
                .entry(key.to_string())
                .or_insert_with(|| Entry::$variant(Default::default()));
            match entry {
                Entry::$variant(v) => Ok(v),
                _ => Err(wrong_type()),
            }
        }
    };
}

/// One logical database
#[derive(Debug, Default)]
pub(crate) struct Shard {
    data: FxHashMap<String, Entry>,
}

impl Shard {
    typed_access!(hash, hash_existing, hash_mut, Hash, FxHashMap<String, String>);
    typed_access!(list, list_existing, list_mut, List, VecDeque<String>);
    typed_access!(set, set_existing, set_mut, Set, FxHashSet<String>);

    /// Drop the key if its collection is empty.
    pub(crate) fn prune(&mut self, key: &str) {
        if self.data.get(key).map_or(false, Entry::is_empty) {
            self.data.remove(key);
        }
    }

    pub(crate) fn remove(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// In-memory store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - reads take the target database's shard read lock
/// - writes take the target database's shard write lock
/// - different databases never contend
///
/// # Example
///
/// ```
/// use redcoll_core::Connection;
/// use redcoll_memory::MemoryStore;
///
/// let store = MemoryStore::new();
/// let mut conn = store.connect();
/// conn.sadd("tags", &["a", "b"]).unwrap();
/// assert_eq!(conn.scard("tags").unwrap(), 2);
/// assert_eq!(store.commands_processed(), 2);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    shards: DashMap<u32, Shard>,
    databases: u32,
    online: AtomicBool,
    commands: AtomicU64,
}

impl MemoryStore {
    /// Create a store with [`DEFAULT_DATABASES`] databases.
    pub fn new() -> Arc<Self> {
        Self::with_databases(DEFAULT_DATABASES)
    }

    /// Create a store exposing `databases` databases (at least one).
    pub fn with_databases(databases: u32) -> Arc<Self> {
        Arc::new(Self {
            shards: DashMap::new(),
            databases: databases.max(1),
            online: AtomicBool::new(true),
            commands: AtomicU64::new(0),
        })
    }

    /// Open a direct connection on database 0.
    pub fn connect(self: &Arc<Self>) -> MemoryConnection {
        MemoryConnection::new(Arc::clone(self))
    }

    /// Build a connection pool over this store.
    pub fn pool(self: &Arc<Self>, config: &PoolConfig) -> Result<MemoryPool> {
        config.build_pool(MemoryConnectionManager::new(Arc::clone(self)))
    }

    /// Number of databases.
    pub fn databases(&self) -> u32 {
        self.databases
    }

    /// Number of commands received so far.
    pub fn commands_processed(&self) -> u64 {
        self.commands.load(Ordering::Acquire)
    }

    /// Number of keys in a database.
    pub fn key_count(&self, database: u32) -> usize {
        self.shards.get(&database).map_or(0, |shard| shard.len())
    }

    /// Remove every key in every database.
    pub fn flush_all(&self) {
        self.shards.clear();
    }

    /// Simulate the store going away (`false`) or coming back (`true`).
    ///
    /// While offline, every command and every new connection fails with a
    /// connectivity error.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }

    /// Whether the store accepts commands.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub(crate) fn ensure_online(&self) -> Result<()> {
        if self.is_online() {
            Ok(())
        } else {
            Err(Error::connectivity(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "memory store is offline",
            )))
        }
    }

    /// Count a command and check the store can answer it.
    pub(crate) fn receive(&self, command: &'static str, database: u32, key: &str) -> Result<()> {
        self.ensure_online()?;
        self.commands.fetch_add(1, Ordering::AcqRel);
        trace!(command, database, key, "memory command");
        Ok(())
    }

    /// Run a read-only command against one database.
    pub(crate) fn read<T>(
        &self,
        command: &'static str,
        database: u32,
        key: &str,
        f: impl FnOnce(&Shard) -> Result<T>,
    ) -> Result<T> {
        self.receive(command, database, key)?;
        match self.shards.get(&database) {
            Some(shard) => f(&shard),
            None => f(&Shard::default()),
        }
    }

    /// Run a mutating command against one database.
    pub(crate) fn write<T>(
        &self,
        command: &'static str,
        database: u32,
        key: &str,
        f: impl FnOnce(&mut Shard) -> Result<T>,
    ) -> Result<T> {
        self.receive(command, database, key)?;
        let mut shard = self.shards.entry(database).or_default();
        let result = f(&mut shard);
        shard.prune(key);
        result
    }
}
