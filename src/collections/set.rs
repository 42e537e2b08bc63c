//! Set accessor backed by a set.

use std::collections::HashSet;

use redcoll_core::{validate_key, Connection, Result};

use crate::iter::Iter;
use crate::source::ConnectionSource;

/// Unordered set of strings stored at one key.
///
/// Adding is idempotent: concurrent `add` calls for the same value from any
/// number of accessors leave exactly one member.
///
/// Obtain one from [`Collections::set`](crate::Collections::set).
#[derive(Debug, Clone)]
pub struct RedisSet<S> {
    source: S,
    key: String,
}

impl<S: ConnectionSource> RedisSet<S> {
    pub(crate) fn new(source: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self { source, key })
    }

    /// The store key of the set.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add a member.
    ///
    /// Returns `true` if it was not already present.
    pub fn add(&self, value: &str) -> Result<bool> {
        let added = self.source.with_connection(|c| c.sadd(&self.key, &[value]))?;
        Ok(added > 0)
    }

    /// Add many members with one command, returning how many were new.
    ///
    /// An empty input issues no command.
    pub fn add_all<I, V>(&self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(0);
        }
        let refs: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        self.source.with_connection(|c| c.sadd(&self.key, &refs))
    }

    /// Remove a member.
    ///
    /// Returns `true` if it was present.
    pub fn remove(&self, value: &str) -> Result<bool> {
        let removed = self.source.with_connection(|c| c.srem(&self.key, &[value]))?;
        Ok(removed > 0)
    }

    /// Remove many members with one command, returning how many were present.
    ///
    /// An empty input issues no command.
    pub fn remove_all<I, V>(&self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(0);
        }
        let refs: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        self.source.with_connection(|c| c.srem(&self.key, &refs))
    }

    /// Check membership.
    pub fn contains(&self, value: &str) -> Result<bool> {
        self.source
            .with_connection(|c| c.sismember(&self.key, value))
    }

    /// Number of members.
    pub fn len(&self) -> Result<usize> {
        self.source.with_connection(|c| c.scard(&self.key))
    }

    /// Check if the set has no members.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterate over a snapshot of the members, in no particular order.
    pub fn iter(&self) -> Result<Iter<String>> {
        let members = self.source.with_connection(|c| c.smembers(&self.key))?;
        Ok(Iter::new(members))
    }

    /// Copy the set into a `HashSet`.
    pub fn to_hash_set(&self) -> Result<HashSet<String>> {
        Ok(self.iter()?.collect())
    }

    /// Delete the whole set.
    pub fn clear(&self) -> Result<()> {
        self.source.with_connection(|c| c.del(&self.key))?;
        Ok(())
    }
}
