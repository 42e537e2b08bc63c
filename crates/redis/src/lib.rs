//! Redis backend for redcoll
//!
//! Wraps the `redis` client so that collection accessors issue real Redis
//! commands, and plugs it into `r2d2` for pooled use.
//!
//! ```ignore
//! use redcoll_redis::RedisConfig;
//!
//! let pool = RedisConfig::new("redis://127.0.0.1/").open_pool()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod connection;
mod manager;

pub use config::{RedisConfig, RedisPool, DEFAULT_URL};
pub use connection::RedisConnection;
pub use manager::RedisConnectionManager;
