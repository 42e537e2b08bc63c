//! Map accessor backed by a hash.
//!
//! # Example
//!
//! ```ignore
//! use redcoll::prelude::*;
//!
//! let users = collections.map("users:names")?;
//! users.put("1", "Alice")?;
//! assert_eq!(users.get("1")?, Some("Alice".to_string()));
//! assert!(users.remove("1")?);
//! ```

use std::collections::HashMap;

use redcoll_core::{validate_key, Connection, Result};

use crate::iter::Iter;
use crate::source::ConnectionSource;

/// Hash-backed map of string fields to string values.
///
/// Obtain one from [`Collections::map`](crate::Collections::map).
#[derive(Debug, Clone)]
pub struct RedisMap<S> {
    source: S,
    key: String,
}

impl<S: ConnectionSource> RedisMap<S> {
    pub(crate) fn new(source: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self { source, key })
    }

    /// The store key of the hash.
    pub fn key(&self) -> &str {
        &self.key
    }

    // =========================================================================
    // Single fields
    // =========================================================================

    /// Get the value of a field.
    ///
    /// Returns `None` if the field (or the whole hash) doesn't exist.
    pub fn get(&self, field: &str) -> Result<Option<String>> {
        self.source.with_connection(|c| c.hget(&self.key, field))
    }

    /// Set a field, returning its previous value.
    ///
    /// Overwrites unconditionally. The read of the previous value and the
    /// write are two commands on one connection, not one atomic step.
    pub fn put(&self, field: &str, value: &str) -> Result<Option<String>> {
        self.source.with_connection(|c| {
            let previous = c.hget(&self.key, field)?;
            c.hset(&self.key, field, value)?;
            Ok(previous)
        })
    }

    /// Set a field only if it doesn't exist.
    ///
    /// Returns `true` if the field was set.
    pub fn put_if_absent(&self, field: &str, value: &str) -> Result<bool> {
        self.source
            .with_connection(|c| c.hsetnx(&self.key, field, value))
    }

    /// Remove a field.
    ///
    /// Returns `true` if the field existed.
    pub fn remove(&self, field: &str) -> Result<bool> {
        self.source.with_connection(|c| c.hdel(&self.key, field))
    }

    /// Remove a field, returning the value it had.
    pub fn take(&self, field: &str) -> Result<Option<String>> {
        self.source.with_connection(|c| {
            let previous = c.hget(&self.key, field)?;
            if previous.is_some() {
                c.hdel(&self.key, field)?;
            }
            Ok(previous)
        })
    }

    /// Check if a field exists.
    pub fn contains_field(&self, field: &str) -> Result<bool> {
        self.source.with_connection(|c| c.hexists(&self.key, field))
    }

    // =========================================================================
    // Whole map
    // =========================================================================

    /// Set many fields with one command.
    ///
    /// An empty input issues no command.
    pub fn put_all<I, F, V>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (F, V)>,
        F: AsRef<str>,
        V: AsRef<str>,
    {
        let entries: Vec<(F, V)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Ok(());
        }
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|(f, v)| (f.as_ref(), v.as_ref()))
            .collect();
        self.source
            .with_connection(|c| c.hset_multiple(&self.key, &pairs))?;
        Ok(())
    }

    /// Number of fields.
    pub fn len(&self) -> Result<usize> {
        self.source.with_connection(|c| c.hlen(&self.key))
    }

    /// Check if the map has no fields.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All field names, in no particular order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.source.with_connection(|c| c.hkeys(&self.key))
    }

    /// All values, in no particular order.
    pub fn values(&self) -> Result<Vec<String>> {
        self.source.with_connection(|c| c.hvals(&self.key))
    }

    /// Iterate over a snapshot of `(field, value)` pairs.
    ///
    /// # Example
    ///
    /// ```ignore
    /// for (field, value) in map.iter()? {
    ///     println!("{} = {}", field, value);
    /// }
    /// ```
    pub fn iter(&self) -> Result<Iter<(String, String)>> {
        let entries = self.source.with_connection(|c| c.hgetall(&self.key))?;
        Ok(Iter::new(entries))
    }

    /// Copy the map into a `HashMap`.
    pub fn to_hash_map(&self) -> Result<HashMap<String, String>> {
        Ok(self.iter()?.collect())
    }

    /// Delete the whole hash.
    pub fn clear(&self) -> Result<()> {
        self.source.with_connection(|c| c.del(&self.key))?;
        Ok(())
    }
}
