//! Collections API Test Suite
//!
//! Exercises the public accessors end to end against the in-process store,
//! which implements the same hash, list and set semantics as the server and
//! counts every command it receives.
//!
//! ## Key Verification Points
//!
//! 1. Each accessor operation reaches the store and reflects its current state
//! 2. Validation failures happen before any command is sent
//! 3. Pooled factories isolate databases
//! 4. Concurrent callers converge the way the store's commands do
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test collections_api
//!
//! # Run list tests only
//! cargo test --test collections_api list::
//! ```

use std::sync::Arc;
use std::time::Duration;

use redcoll::prelude::*;

// Test modules
pub mod concurrency;
pub mod list;
pub mod properties;
pub mod set;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Database the pooled helpers select
pub const TEST_DATABASE: u32 = 1;

/// Send every trace event to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Create an empty in-process store
pub fn create_store() -> Arc<MemoryStore> {
    init_tracing();
    MemoryStore::new()
}

/// Small pool that gives up quickly
pub fn test_pool_config() -> PoolConfig {
    PoolConfig::default()
        .max_connections(4)
        .connection_timeout(Duration::from_millis(200))
}

/// Create a pool over `store`
pub fn create_pool(store: &Arc<MemoryStore>) -> MemoryPool {
    store
        .pool(&test_pool_config())
        .expect("Failed to create pool")
}

/// Pooled factory selecting [`TEST_DATABASE`]
pub fn create_pooled(store: &Arc<MemoryStore>) -> Collections<Pooled<MemoryPool>> {
    Collections::builder()
        .pool(create_pool(store))
        .database(TEST_DATABASE)
        .build()
        .expect("Failed to build pooled collections")
}

/// Factory sharing one direct connection
pub fn create_direct(store: &Arc<MemoryStore>) -> Collections<Direct<MemoryConnection>> {
    Collections::direct(store.connect())
}

/// Sort a vector so unordered results compare
pub fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}
