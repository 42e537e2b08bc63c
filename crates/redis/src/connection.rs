//! `Connection` over a `redis::Connection`.

use std::collections::HashMap;

use redcoll_core::{Connection, Error, Result};
use redis::{Cmd, FromRedisValue, RedisError};
use tracing::trace;

/// Classify a `redis` failure.
///
/// Transport problems (I/O, refused, dropped, timed out) are connectivity
/// errors; anything else is the server rejecting the command.
pub(crate) fn map_error(err: RedisError) -> Error {
    if err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
    {
        Error::connectivity(err)
    } else {
        Error::Command(err.to_string())
    }
}

/// Parse a connection URL, rejecting malformed ones before any I/O.
pub(crate) fn open_client(url: &str) -> Result<redis::Client> {
    redis::Client::open(url).map_err(|e| Error::Validation(format!("invalid redis url: {}", e)))
}

/// A single Redis connection.
///
/// The connection stays open for as long as this value lives; whoever owns
/// it decides when to close it.
pub struct RedisConnection {
    inner: redis::Connection,
}

impl RedisConnection {
    /// Connect to the server at `url`.
    pub fn open(url: &str) -> Result<Self> {
        let client = open_client(url)?;
        let inner = client.get_connection().map_err(map_error)?;
        Ok(Self { inner })
    }

    /// Whether the underlying socket is still usable.
    pub fn is_open(&self) -> bool {
        use redis::ConnectionLike;
        self.inner.is_open()
    }

    /// Send a `PING`.
    pub fn ping(&mut self) -> Result<()> {
        self.run("PING", "", &redis::cmd("PING"))
    }

    /// Access the wrapped `redis::Connection`.
    pub fn inner_mut(&mut self) -> &mut redis::Connection {
        &mut self.inner
    }

    fn run<T: FromRedisValue>(&mut self, name: &'static str, key: &str, cmd: &Cmd) -> Result<T> {
        trace!(command = name, key, "redis command");
        cmd.query(&mut self.inner).map_err(map_error)
    }
}

impl From<redis::Connection> for RedisConnection {
    fn from(inner: redis::Connection) -> Self {
        Self { inner }
    }
}

impl Connection for RedisConnection {
    fn select(&mut self, database: u32) -> Result<()> {
        self.run("SELECT", "", redis::cmd("SELECT").arg(database))
    }

    fn del(&mut self, key: &str) -> Result<bool> {
        let removed: usize = self.run("DEL", key, redis::cmd("DEL").arg(key))?;
        Ok(removed > 0)
    }

    // =========================================================================
    // Hash
    // =========================================================================

    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>> {
        self.run("HGET", key, redis::cmd("HGET").arg(key).arg(field))
    }

    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool> {
        let added: usize = self.run("HSET", key, redis::cmd("HSET").arg(key).arg(field).arg(value))?;
        Ok(added > 0)
    }

    fn hset_multiple(&mut self, key: &str, entries: &[(&str, &str)]) -> Result<usize> {
        let mut cmd = redis::cmd("HSET");
        cmd.arg(key);
        for (field, value) in entries {
            cmd.arg(*field).arg(*value);
        }
        self.run("HSET", key, &cmd)
    }

    fn hsetnx(&mut self, key: &str, field: &str, value: &str) -> Result<bool> {
        self.run("HSETNX", key, redis::cmd("HSETNX").arg(key).arg(field).arg(value))
    }

    fn hdel(&mut self, key: &str, field: &str) -> Result<bool> {
        let removed: usize = self.run("HDEL", key, redis::cmd("HDEL").arg(key).arg(field))?;
        Ok(removed > 0)
    }

    fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        self.run("HEXISTS", key, redis::cmd("HEXISTS").arg(key).arg(field))
    }

    fn hlen(&mut self, key: &str) -> Result<usize> {
        self.run("HLEN", key, redis::cmd("HLEN").arg(key))
    }

    fn hgetall(&mut self, key: &str) -> Result<Vec<(String, String)>> {
        let entries: HashMap<String, String> =
            self.run("HGETALL", key, redis::cmd("HGETALL").arg(key))?;
        Ok(entries.into_iter().collect())
    }

    fn hkeys(&mut self, key: &str) -> Result<Vec<String>> {
        self.run("HKEYS", key, redis::cmd("HKEYS").arg(key))
    }

    fn hvals(&mut self, key: &str) -> Result<Vec<String>> {
        self.run("HVALS", key, redis::cmd("HVALS").arg(key))
    }

    // =========================================================================
    // List
    // =========================================================================

    fn lpush(&mut self, key: &str, values: &[&str]) -> Result<usize> {
        self.run("LPUSH", key, redis::cmd("LPUSH").arg(key).arg(values))
    }

    fn rpush(&mut self, key: &str, values: &[&str]) -> Result<usize> {
        self.run("RPUSH", key, redis::cmd("RPUSH").arg(key).arg(values))
    }

    fn lindex(&mut self, key: &str, index: i64) -> Result<Option<String>> {
        self.run("LINDEX", key, redis::cmd("LINDEX").arg(key).arg(index))
    }

    fn lset(&mut self, key: &str, index: i64, value: &str) -> Result<()> {
        self.run("LSET", key, redis::cmd("LSET").arg(key).arg(index).arg(value))
    }

    fn lrem(&mut self, key: &str, count: i64, value: &str) -> Result<usize> {
        self.run("LREM", key, redis::cmd("LREM").arg(key).arg(count).arg(value))
    }

    fn lremove_at(&mut self, key: &str, index: i64, marker: &str) -> Result<()> {
        trace!(command = "MULTI", key, "redis transaction: LSET, LREM");
        redis::pipe()
            .atomic()
            .cmd("LSET")
            .arg(key)
            .arg(index)
            .arg(marker)
            .ignore()
            .cmd("LREM")
            .arg(key)
            .arg(1)
            .arg(marker)
            .ignore()
            .query(&mut self.inner)
            .map_err(map_error)
    }

    fn llen(&mut self, key: &str) -> Result<usize> {
        self.run("LLEN", key, redis::cmd("LLEN").arg(key))
    }

    fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.run("LRANGE", key, redis::cmd("LRANGE").arg(key).arg(start).arg(stop))
    }

    fn lpop(&mut self, key: &str) -> Result<Option<String>> {
        self.run("LPOP", key, redis::cmd("LPOP").arg(key))
    }

    fn rpop(&mut self, key: &str) -> Result<Option<String>> {
        self.run("RPOP", key, redis::cmd("RPOP").arg(key))
    }

    // =========================================================================
    // Set
    // =========================================================================

    fn sadd(&mut self, key: &str, members: &[&str]) -> Result<usize> {
        self.run("SADD", key, redis::cmd("SADD").arg(key).arg(members))
    }

    fn srem(&mut self, key: &str, members: &[&str]) -> Result<usize> {
        self.run("SREM", key, redis::cmd("SREM").arg(key).arg(members))
    }

    fn sismember(&mut self, key: &str, member: &str) -> Result<bool> {
        self.run("SISMEMBER", key, redis::cmd("SISMEMBER").arg(key).arg(member))
    }

    fn scard(&mut self, key: &str) -> Result<usize> {
        self.run("SCARD", key, redis::cmd("SCARD").arg(key))
    }

    fn smembers(&mut self, key: &str) -> Result<Vec<String>> {
        self.run("SMEMBERS", key, redis::cmd("SMEMBERS").arg(key))
    }
}
