//! # redcoll
//!
//! Map, list and set accessors whose contents live in a Redis server.
//!
//! An accessor is a thin handle: a connection source plus one store key.
//! It holds no data, and every call is translated into the store's native
//! hash, list or set commands, so any number of processes sharing the
//! server see one consistent collection.
//!
//! ## Quick Start
//!
//! ```ignore
//! use redcoll::prelude::*;
//!
//! let pool = RedisConfig::new("redis://127.0.0.1/").open_pool()?;
//! let collections = Collections::builder().pool(pool).database(2).build()?;
//!
//! let names = collections.map("user:names")?;
//! names.put("1", "Alice")?;
//!
//! let jobs = collections.list("jobs")?;
//! jobs.add("resize:42")?;
//!
//! let tags = collections.set("tags")?;
//! tags.add("blue")?;
//! ```
//!
//! ## Connection Sources
//!
//! | Factory | Source | Database |
//! |---------|--------|----------|
//! | [`Collections::direct`] | one shared connection | whatever the connection uses |
//! | [`Collections::pooled`] | checkout per operation | `SELECT 0` on every checkout |
//! | [`Collections::builder`] | checkout per operation | `SELECT` of the chosen database on every checkout |
//!
//! ## Backends
//!
//! - [`redis`] - the real server, via the `redis` client and `r2d2` pools
//!   (feature `redis`, on by default)
//! - [`memory`] - an in-process store with the same command semantics,
//!   for tests and offline use
//!
//! ## Errors
//!
//! Every call returns [`Result`]. Empty keys are rejected before any I/O
//! with [`Error::Validation`]; pool exhaustion and lost connections surface
//! as [`Error::Connectivity`]; bad list positions as [`Error::OutOfRange`].

#![warn(missing_docs)]

mod collections;
mod factory;
mod iter;

pub mod prelude;
pub mod source;

pub use collections::{RedisList, RedisMap, RedisSet};
pub use factory::{Collections, CollectionsBuilder};
pub use iter::Iter;

pub use redcoll_core::{BoxError, Connection, ConnectionPool, Error, PoolConfig, Result};

/// In-process backend.
pub mod memory {
    pub use redcoll_memory::*;
}

/// Redis backend.
#[cfg(feature = "redis")]
pub mod redis {
    pub use redcoll_redis::*;

    use crate::source::Pooled;
    use crate::{Collections, Result};

    impl Collections<Pooled<RedisPool>> {
        /// Open a pool from `config` and build a factory over it.
        ///
        /// The factory selects [`RedisConfig::resolved_database`] on every
        /// checkout.
        pub fn open_redis(config: &RedisConfig) -> Result<Self> {
            let database = config.resolved_database()?;
            let pool = config.open_pool()?;
            Self::builder().pool(pool).database(database).build()
        }
    }
}
