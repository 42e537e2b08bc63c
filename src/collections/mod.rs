//! Collection accessors.
//!
//! Each accessor pairs a connection source with one store key and maps
//! collection operations onto the native commands for that key:
//!
//! | Accessor | Store type | Example |
//! |----------|------------|---------|
//! | [`RedisMap`] | hash | `map.put("field", "value")` → `HGET` + `HSET` |
//! | [`RedisList`] | list | `list.add("value")` → `RPUSH` |
//! | [`RedisSet`] | set | `set.add("value")` → `SADD` |
//!
//! Accessors hold no data. Every call goes to the store and reflects its
//! state at call time, so two accessors on the same key see each other's
//! writes immediately.

mod list;
mod map;
mod set;

pub use list::RedisList;
pub use map::RedisMap;
pub use set::RedisSet;
