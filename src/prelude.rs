//! Convenient imports for redcoll.
//!
//! ```ignore
//! use redcoll::prelude::*;
//!
//! let collections = Collections::direct(store.connect());
//! collections.set("tags")?.add("blue")?;
//! ```

// Entry point
pub use crate::factory::{Collections, CollectionsBuilder};

// Error handling
pub use crate::{Error, Result};

// Accessors
pub use crate::collections::{RedisList, RedisMap, RedisSet};
pub use crate::iter::Iter;

// Connections
pub use crate::source::{ConnectionSource, Direct, Pooled};
pub use crate::{Connection, ConnectionPool, PoolConfig};

// Backends
pub use crate::memory::{MemoryConnection, MemoryPool, MemoryStore};

#[cfg(feature = "redis")]
pub use crate::redis::{RedisConfig, RedisConnection, RedisPool};
