//! The store command set.
//!
//! `Connection` is the seam between the collection accessors and a concrete
//! store client. Each method is one native command; method names follow the
//! command names so that an accessor reads like the commands it issues.
//!
//! ## Commands
//!
//! | Group | Commands |
//! |-------|----------|
//! | Keyspace | `SELECT`, `DEL` |
//! | Hash | `HGET`, `HSET`, `HSETNX`, `HDEL`, `HEXISTS`, `HLEN`, `HGETALL`, `HKEYS`, `HVALS` |
//! | List | `LPUSH`, `RPUSH`, `LINDEX`, `LSET`, `LREM`, `LLEN`, `LRANGE`, `LPOP`, `RPOP` |
//! | Set | `SADD`, `SREM`, `SISMEMBER`, `SCARD`, `SMEMBERS` |
//!
//! List indices are signed here, as the store defines them (`-1` is the last
//! element). The list accessor only ever passes non-negative user indices.

use crate::error::Result;

/// A live handle able to issue native store commands.
///
/// Implementations must surface transport failures as
/// [`Error::Connectivity`](crate::Error::Connectivity) and store error replies
/// as [`Error::Command`](crate::Error::Command).
pub trait Connection {
    // =========================================================================
    // Keyspace
    // =========================================================================

    /// `SELECT database`
    fn select(&mut self, database: u32) -> Result<()>;

    /// `DEL key`; returns `true` if the key existed.
    fn del(&mut self, key: &str) -> Result<bool>;

    // =========================================================================
    // Hash
    // =========================================================================

    /// `HGET key field`
    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>>;

    /// `HSET key field value`; returns `true` if the field is new.
    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool>;

    /// `HSET key field value [field value ...]`; returns the number of new fields.
    ///
    /// `entries` must not be empty.
    fn hset_multiple(&mut self, key: &str, entries: &[(&str, &str)]) -> Result<usize>;

    /// `HSETNX key field value`; returns `true` if the field was set.
    fn hsetnx(&mut self, key: &str, field: &str, value: &str) -> Result<bool>;

    /// `HDEL key field`; returns `true` if the field was removed.
    fn hdel(&mut self, key: &str, field: &str) -> Result<bool>;

    /// `HEXISTS key field`
    fn hexists(&mut self, key: &str, field: &str) -> Result<bool>;

    /// `HLEN key`
    fn hlen(&mut self, key: &str) -> Result<usize>;

    /// `HGETALL key`
    fn hgetall(&mut self, key: &str) -> Result<Vec<(String, String)>>;

    /// `HKEYS key`
    fn hkeys(&mut self, key: &str) -> Result<Vec<String>>;

    /// `HVALS key`
    fn hvals(&mut self, key: &str) -> Result<Vec<String>>;

    // =========================================================================
    // List
    // =========================================================================

    /// `LPUSH key value [value ...]`; returns the new length.
    ///
    /// `values` must not be empty.
    fn lpush(&mut self, key: &str, values: &[&str]) -> Result<usize>;

    /// `RPUSH key value [value ...]`; returns the new length.
    ///
    /// `values` must not be empty.
    fn rpush(&mut self, key: &str, values: &[&str]) -> Result<usize>;

    /// `LINDEX key index`
    fn lindex(&mut self, key: &str, index: i64) -> Result<Option<String>>;

    /// `LSET key index value`
    fn lset(&mut self, key: &str, index: i64, value: &str) -> Result<()>;

    /// `LREM key count value`; returns the number of removed elements.
    fn lrem(&mut self, key: &str, count: i64, value: &str) -> Result<usize>;

    /// `MULTI`, `LSET key index marker`, `LREM key 1 marker`, `EXEC`.
    ///
    /// Removes the element at `index` as one transaction: either the element
    /// is gone or the list is unchanged, never left holding `marker`.
    /// `marker` must not otherwise occur in the list.
    fn lremove_at(&mut self, key: &str, index: i64, marker: &str) -> Result<()>;

    /// `LLEN key`
    fn llen(&mut self, key: &str) -> Result<usize>;

    /// `LRANGE key start stop` (inclusive bounds)
    fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>>;

    /// `LPOP key`
    fn lpop(&mut self, key: &str) -> Result<Option<String>>;

    /// `RPOP key`
    fn rpop(&mut self, key: &str) -> Result<Option<String>>;

    // =========================================================================
    // Set
    // =========================================================================

    /// `SADD key member [member ...]`; returns the number of new members.
    ///
    /// `members` must not be empty.
    fn sadd(&mut self, key: &str, members: &[&str]) -> Result<usize>;

    /// `SREM key member [member ...]`; returns the number of removed members.
    ///
    /// `members` must not be empty.
    fn srem(&mut self, key: &str, members: &[&str]) -> Result<usize>;

    /// `SISMEMBER key member`
    fn sismember(&mut self, key: &str, member: &str) -> Result<bool>;

    /// `SCARD key`
    fn scard(&mut self, key: &str) -> Result<usize>;

    /// `SMEMBERS key`
    fn smembers(&mut self, key: &str) -> Result<Vec<String>>;
}
