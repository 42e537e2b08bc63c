//! `Connection` over a `MemoryStore`.

use std::sync::Arc;

use redcoll_core::{Connection, Error, Result};

use crate::store::MemoryStore;

/// Resolve a store-style signed index against a length.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let index = if index < 0 { len + index } else { index };
    if (0..len).contains(&index) {
        Some(index as usize)
    } else {
        None
    }
}

/// Resolve inclusive `LRANGE` bounds into a half-open range.
fn resolve_range(start: i64, stop: i64, len: usize) -> Option<std::ops::Range<usize>> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start > stop || start >= len {
        None
    } else {
        Some(start as usize..stop as usize + 1)
    }
}

fn arity(command: &str) -> Error {
    Error::Command(format!(
        "ERR wrong number of arguments for '{}' command",
        command.to_lowercase()
    ))
}

/// A direct handle to a [`MemoryStore`].
///
/// Cheap to create; every handle starts on database 0 and keeps its own
/// `SELECT`ed database, like a network connection would.
#[derive(Debug, Clone)]
pub struct MemoryConnection {
    store: Arc<MemoryStore>,
    database: u32,
}

impl MemoryConnection {
    pub(crate) fn new(store: Arc<MemoryStore>) -> Self {
        Self { store, database: 0 }
    }

    /// Currently selected database.
    pub fn database(&self) -> u32 {
        self.database
    }

    /// The store this handle talks to.
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }
}

impl Connection for MemoryConnection {
    fn select(&mut self, database: u32) -> Result<()> {
        self.store.receive("SELECT", database, "")?;
        if database >= self.store.databases() {
            return Err(Error::Command("ERR DB index is out of range".to_string()));
        }
        self.database = database;
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<bool> {
        self.store
            .write("DEL", self.database, key, |shard| Ok(shard.remove(key)))
    }

    // =========================================================================
    // Hash
    // =========================================================================

    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>> {
        self.store.read("HGET", self.database, key, |shard| {
            Ok(shard.hash(key)?.and_then(|h| h.get(field).cloned()))
        })
    }

    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool> {
        self.store.write("HSET", self.database, key, |shard| {
            let hash = shard.hash_mut(key)?;
            Ok(hash.insert(field.to_string(), value.to_string()).is_none())
        })
    }

    fn hset_multiple(&mut self, key: &str, entries: &[(&str, &str)]) -> Result<usize> {
        self.store.write("HSET", self.database, key, |shard| {
            if entries.is_empty() {
                return Err(arity("HSET"));
            }
            let hash = shard.hash_mut(key)?;
            let mut added = 0;
            for (field, value) in entries {
                if hash.insert(field.to_string(), value.to_string()).is_none() {
                    added += 1;
                }
            }
            Ok(added)
        })
    }

    fn hsetnx(&mut self, key: &str, field: &str, value: &str) -> Result<bool> {
        self.store.write("HSETNX", self.database, key, |shard| {
            let hash = shard.hash_mut(key)?;
            if hash.contains_key(field) {
                return Ok(false);
            }
            hash.insert(field.to_string(), value.to_string());
            Ok(true)
        })
    }

    fn hdel(&mut self, key: &str, field: &str) -> Result<bool> {
        self.store.write("HDEL", self.database, key, |shard| {
            Ok(shard
                .hash_existing(key)?
                .map_or(false, |h| h.remove(field).is_some()))
        })
    }

    fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        self.store.read("HEXISTS", self.database, key, |shard| {
            Ok(shard.hash(key)?.map_or(false, |h| h.contains_key(field)))
        })
    }

    fn hlen(&mut self, key: &str) -> Result<usize> {
        self.store.read("HLEN", self.database, key, |shard| {
            Ok(shard.hash(key)?.map_or(0, |h| h.len()))
        })
    }

    fn hgetall(&mut self, key: &str) -> Result<Vec<(String, String)>> {
        self.store.read("HGETALL", self.database, key, |shard| {
            Ok(shard.hash(key)?.map_or_else(Vec::new, |h| {
                h.iter().map(|(f, v)| (f.clone(), v.clone())).collect()
            }))
        })
    }

    fn hkeys(&mut self, key: &str) -> Result<Vec<String>> {
        self.store.read("HKEYS", self.database, key, |shard| {
            Ok(shard
                .hash(key)?
                .map_or_else(Vec::new, |h| h.keys().cloned().collect()))
        })
    }

    fn hvals(&mut self, key: &str) -> Result<Vec<String>> {
        self.store.read("HVALS", self.database, key, |shard| {
            Ok(shard
                .hash(key)?
                .map_or_else(Vec::new, |h| h.values().cloned().collect()))
        })
    }

    // =========================================================================
    // List
    // =========================================================================

    fn lpush(&mut self, key: &str, values: &[&str]) -> Result<usize> {
        self.store.write("LPUSH", self.database, key, |shard| {
            if values.is_empty() {
                return Err(arity("LPUSH"));
            }
            let list = shard.list_mut(key)?;
            for value in values {
                list.push_front(value.to_string());
            }
            Ok(list.len())
        })
    }

    fn rpush(&mut self, key: &str, values: &[&str]) -> Result<usize> {
        self.store.write("RPUSH", self.database, key, |shard| {
            if values.is_empty() {
                return Err(arity("RPUSH"));
            }
            let list = shard.list_mut(key)?;
            list.extend(values.iter().map(|v| v.to_string()));
            Ok(list.len())
        })
    }

    fn lindex(&mut self, key: &str, index: i64) -> Result<Option<String>> {
        self.store.read("LINDEX", self.database, key, |shard| {
            Ok(shard.list(key)?.and_then(|list| {
                resolve_index(index, list.len()).map(|i| list[i].clone())
            }))
        })
    }

    fn lset(&mut self, key: &str, index: i64, value: &str) -> Result<()> {
        self.store.write("LSET", self.database, key, |shard| {
            let list = shard
                .list_existing(key)?
                .ok_or_else(|| Error::Command("ERR no such key".to_string()))?;
            let i = resolve_index(index, list.len())
                .ok_or_else(|| Error::Command("ERR index out of range".to_string()))?;
            list[i] = value.to_string();
            Ok(())
        })
    }

    fn lrem(&mut self, key: &str, count: i64, value: &str) -> Result<usize> {
        self.store.write("LREM", self.database, key, |shard| {
            let list = match shard.list_existing(key)? {
                Some(list) => list,
                None => return Ok(0),
            };
            let limit = if count == 0 {
                usize::MAX
            } else {
                count.unsigned_abs() as usize
            };
            let mut matches: Vec<usize> = list
                .iter()
                .enumerate()
                .filter(|(_, v)| v.as_str() == value)
                .map(|(i, _)| i)
                .collect();
            if count < 0 {
                matches.reverse();
            }
            matches.truncate(limit);
            // Remove back to front so earlier positions stay valid.
            matches.sort_unstable_by(|a, b| b.cmp(a));
            for i in &matches {
                list.remove(*i);
            }
            Ok(matches.len())
        })
    }

    fn lremove_at(&mut self, key: &str, index: i64, marker: &str) -> Result<()> {
        self.store.write("MULTI", self.database, key, |shard| {
            let list = shard
                .list_existing(key)?
                .ok_or_else(|| Error::Command("ERR no such key".to_string()))?;
            let i = resolve_index(index, list.len())
                .ok_or_else(|| Error::Command("ERR index out of range".to_string()))?;
            list[i] = marker.to_string();
            if let Some(pos) = list.iter().position(|v| v == marker) {
                list.remove(pos);
            }
            Ok(())
        })
    }

    fn llen(&mut self, key: &str) -> Result<usize> {
        self.store.read("LLEN", self.database, key, |shard| {
            Ok(shard.list(key)?.map_or(0, |l| l.len()))
        })
    }

    fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.store.read("LRANGE", self.database, key, |shard| {
            Ok(shard.list(key)?.map_or_else(Vec::new, |list| {
                resolve_range(start, stop, list.len())
                    .map(|range| list.range(range).cloned().collect())
                    .unwrap_or_default()
            }))
        })
    }

    fn lpop(&mut self, key: &str) -> Result<Option<String>> {
        self.store.write("LPOP", self.database, key, |shard| {
            Ok(shard.list_existing(key)?.and_then(|l| l.pop_front()))
        })
    }

    fn rpop(&mut self, key: &str) -> Result<Option<String>> {
        self.store.write("RPOP", self.database, key, |shard| {
            Ok(shard.list_existing(key)?.and_then(|l| l.pop_back()))
        })
    }

    // =========================================================================
    // Set
    // =========================================================================

    fn sadd(&mut self, key: &str, members: &[&str]) -> Result<usize> {
        self.store.write("SADD", self.database, key, |shard| {
            if members.is_empty() {
                return Err(arity("SADD"));
            }
            let set = shard.set_mut(key)?;
            Ok(members
                .iter()
                .filter(|m| set.insert(m.to_string()))
                .count())
        })
    }

    fn srem(&mut self, key: &str, members: &[&str]) -> Result<usize> {
        self.store.write("SREM", self.database, key, |shard| {
            if members.is_empty() {
                return Err(arity("SREM"));
            }
            Ok(match shard.set_existing(key)? {
                Some(set) => members.iter().filter(|m| set.remove(**m)).count(),
                None => 0,
            })
        })
    }

    fn sismember(&mut self, key: &str, member: &str) -> Result<bool> {
        self.store.read("SISMEMBER", self.database, key, |shard| {
            Ok(shard.set(key)?.map_or(false, |s| s.contains(member)))
        })
    }

    fn scard(&mut self, key: &str) -> Result<usize> {
        self.store.read("SCARD", self.database, key, |shard| {
            Ok(shard.set(key)?.map_or(0, |s| s.len()))
        })
    }

    fn smembers(&mut self, key: &str) -> Result<Vec<String>> {
        self.store.read("SMEMBERS", self.database, key, |shard| {
            Ok(shard
                .set(key)?
                .map_or_else(Vec::new, |s| s.iter().cloned().collect()))
        })
    }
}
