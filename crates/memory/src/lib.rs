//! In-process store for redcoll
//!
//! `MemoryStore` answers the same hash, list and set commands as Redis,
//! from memory, so collection accessors can run without a server:
//! - `MemoryStore`: databases sharded by index, one lock per database
//! - `MemoryConnection`: a direct handle implementing `Connection`
//! - `MemoryConnectionManager`: `r2d2` manager for pooled handles
//!
//! Every command received is counted, which lets tests assert that an
//! operation was rejected before reaching the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod connection;
mod manager;
mod store;

pub use connection::MemoryConnection;
pub use manager::{MemoryConnectionManager, MemoryPool};
pub use store::{MemoryStore, DEFAULT_DATABASES};
