//! In-process snapshot store.
//!
//! This module provides the MemoryStore implementation backed by a hash map
//! behind a read-write lock. It is the store of choice for tests and for
//! hosting the writer and the renderers inside one process.

use crate::store::{SnapshotStore, SnapshotStoreMut, StoreValue};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Thread-safe in-process key-value store.
///
/// Reads take the shared lock, writes the exclusive lock, which gives each
/// key the per-write atomicity the snapshot contract requires. A single
/// `MemoryStore` can be shared by reference (or `Arc`) between the
/// application writer and any number of tier renderers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, StoreValue>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently present.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// All present keys, sorted. Intended for inspection and tests.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<StoreValue> {
        self.values.read().get(key).cloned()
    }
}

impl SnapshotStoreMut for MemoryStore {
    fn put(&self, key: &str, value: StoreValue) {
        self.values.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}
