//! Core types for redcoll
//!
//! This crate defines the pieces every backend and the collection facade
//! agree on:
//! - `Error` / `Result`: the error taxonomy surfaced by every accessor call
//! - `Connection`: the native hash, list and set command set of the store
//! - `ConnectionPool`: scoped checkout of pooled connections
//! - `PoolConfig`: pool sizing and timeouts
//!
//! Backends (`redcoll-redis`, `redcoll-memory`) implement `Connection`;
//! pooling is delegated to `r2d2`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod error;
pub mod key;
pub mod pool;

pub use connection::Connection;
pub use error::{BoxError, Error, Result};
pub use key::validate_key;
pub use pool::{ConnectionPool, PoolConfig};
