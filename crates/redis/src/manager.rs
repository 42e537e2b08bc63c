//! `r2d2` connection manager for Redis.

use redis::RedisError;

use crate::connection::RedisConnection;

/// Opens [`RedisConnection`]s for an `r2d2::Pool`.
///
/// Connections are checked with `PING` on checkout and discarded once the
/// socket is closed.
#[derive(Debug, Clone)]
pub struct RedisConnectionManager {
    client: redis::Client,
}

impl RedisConnectionManager {
    /// Create a manager for an already-configured client.
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    /// The client used to open connections.
    pub fn client(&self) -> &redis::Client {
        &self.client
    }
}

impl r2d2::ManageConnection for RedisConnectionManager {
    type Connection = RedisConnection;
    type Error = RedisError;

    fn connect(&self) -> Result<RedisConnection, RedisError> {
        self.client.get_connection().map(RedisConnection::from)
    }

    fn is_valid(&self, conn: &mut RedisConnection) -> Result<(), RedisError> {
        redis::cmd("PING").query(conn.inner_mut())
    }

    fn has_broken(&self, conn: &mut RedisConnection) -> bool {
        !conn.is_open()
    }
}
