//! List accessor backed by a list.
//!
//! Indices are zero-based from the head. Unlike the store's own commands,
//! negative "from the end" indices are not accepted; use [`RedisList::last`]
//! or [`RedisList::pop_last`] for the tail.
//!
//! # Example
//!
//! ```ignore
//! use redcoll::prelude::*;
//!
//! let queue = collections.list("jobs")?;
//! queue.add_last("a")?;
//! queue.add_last("b")?;
//! assert_eq!(queue.get(1)?, "b");
//! assert!(queue.get(2).unwrap_err().is_out_of_range());
//! ```

use redcoll_core::{validate_key, Connection, Error, Result};
use uuid::Uuid;

use crate::iter::Iter;
use crate::source::ConnectionSource;

/// Convert a user index to the store's signed index.
///
/// Indices the store cannot address are out of range without asking it.
fn store_index(index: usize) -> Result<i64> {
    i64::try_from(index).map_err(|_| Error::OutOfRange { index, len: None })
}

/// List of strings stored at one key.
///
/// Obtain one from [`Collections::list`](crate::Collections::list).
#[derive(Debug, Clone)]
pub struct RedisList<S> {
    source: S,
    key: String,
}

impl<S: ConnectionSource> RedisList<S> {
    pub(crate) fn new(source: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self { source, key })
    }

    /// The store key of the list.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Element at `index`, or the out-of-range error carrying the current length.
    fn element(&self, c: &mut S::Connection, index: usize) -> Result<String> {
        match c.lindex(&self.key, store_index(index)?)? {
            Some(value) => Ok(value),
            None => Err(Error::OutOfRange {
                index,
                len: Some(c.llen(&self.key)?),
            }),
        }
    }

    // =========================================================================
    // Adding
    // =========================================================================

    /// Append a value. Same as [`add_last`](Self::add_last).
    ///
    /// Returns the new length.
    pub fn add(&self, value: &str) -> Result<usize> {
        self.add_last(value)
    }

    /// Prepend a value, returning the new length.
    pub fn add_first(&self, value: &str) -> Result<usize> {
        self.source.with_connection(|c| c.lpush(&self.key, &[value]))
    }

    /// Append a value, returning the new length.
    pub fn add_last(&self, value: &str) -> Result<usize> {
        self.source.with_connection(|c| c.rpush(&self.key, &[value]))
    }

    /// Append many values with one command.
    ///
    /// An empty input issues no command.
    pub fn add_all<I, V>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(());
        }
        let refs: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        self.source.with_connection(|c| c.rpush(&self.key, &refs))?;
        Ok(())
    }

    // =========================================================================
    // Positional access
    // =========================================================================

    /// Element at `index`.
    ///
    /// Fails with [`Error::OutOfRange`] if `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<String> {
        self.source.with_connection(|c| self.element(c, index))
    }

    /// Replace the element at `index`, returning the old element.
    pub fn set(&self, index: usize, value: &str) -> Result<String> {
        self.source.with_connection(|c| {
            let previous = self.element(c, index)?;
            c.lset(&self.key, store_index(index)?, value)?;
            Ok(previous)
        })
    }

    /// Remove the element at `index`, returning it.
    ///
    /// The store has no remove-by-index command: the element is overwritten
    /// with a unique marker which is then removed by value. Both steps run
    /// in one transaction, so a failure leaves the list as it was.
    pub fn remove_at(&self, index: usize) -> Result<String> {
        self.source.with_connection(|c| {
            let removed = self.element(c, index)?;
            let marker = format!("redcoll:removed:{}", Uuid::new_v4());
            c.lremove_at(&self.key, store_index(index)?, &marker)?;
            Ok(removed)
        })
    }

    /// First element, if any.
    pub fn first(&self) -> Result<Option<String>> {
        self.source.with_connection(|c| c.lindex(&self.key, 0))
    }

    /// Last element, if any.
    pub fn last(&self) -> Result<Option<String>> {
        self.source.with_connection(|c| c.lindex(&self.key, -1))
    }

    /// Remove and return the first element.
    pub fn pop_first(&self) -> Result<Option<String>> {
        self.source.with_connection(|c| c.lpop(&self.key))
    }

    /// Remove and return the last element.
    pub fn pop_last(&self) -> Result<Option<String>> {
        self.source.with_connection(|c| c.rpop(&self.key))
    }

    // =========================================================================
    // By value
    // =========================================================================

    /// Remove the first occurrence of `value`.
    ///
    /// Returns `false` if the value isn't in the list.
    pub fn remove(&self, value: &str) -> Result<bool> {
        let removed = self
            .source
            .with_connection(|c| c.lrem(&self.key, 1, value))?;
        Ok(removed > 0)
    }

    /// Remove every occurrence of `value`, returning how many were removed.
    pub fn remove_all(&self, value: &str) -> Result<usize> {
        self.source.with_connection(|c| c.lrem(&self.key, 0, value))
    }

    /// Position of the first occurrence of `value`.
    ///
    /// Scans one snapshot of the list.
    pub fn index_of(&self, value: &str) -> Result<Option<usize>> {
        Ok(self.iter()?.position(|v| v == value))
    }

    /// Check if `value` is in the list.
    pub fn contains(&self, value: &str) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    // =========================================================================
    // Whole list
    // =========================================================================

    /// Number of elements.
    pub fn len(&self) -> Result<usize> {
        self.source.with_connection(|c| c.llen(&self.key))
    }

    /// Check if the list has no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterate over a snapshot of the whole list, head first.
    pub fn iter(&self) -> Result<Iter<String>> {
        let values = self
            .source
            .with_connection(|c| c.lrange(&self.key, 0, -1))?;
        Ok(Iter::new(values))
    }

    /// Copy the list into a `Vec`.
    pub fn to_vec(&self) -> Result<Vec<String>> {
        self.source.with_connection(|c| c.lrange(&self.key, 0, -1))
    }

    /// Delete the whole list.
    pub fn clear(&self) -> Result<()> {
        self.source.with_connection(|c| c.del(&self.key))?;
        Ok(())
    }
}
