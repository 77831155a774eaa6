//! Shared snapshot store boundary.
//!
//! The budgeting application and the widget renderers communicate through a
//! flat key-value store scoped to both processes. This module defines the
//! value type that store holds, the read and write capabilities as traits,
//! and two implementations: an in-process [`MemoryStore`] and a file-backed
//! [`JsonFileStore`] for the preview host and tooling.
//!
//! Renderers depend only on the read capability and a handle they are given;
//! nothing in this crate reaches for process-global state.

use serde::{Deserialize, Serialize};

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// A single value held in the snapshot store.
///
/// The store is restricted to the three primitive shapes the platform
/// key-value stores share: UTF-8 strings, 64-bit signed integers, and
/// booleans. Anything else found in a store file is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// Boolean flag, e.g. a tier's warning state
    Flag(bool),
    /// Signed 64-bit integer, e.g. an amount or a count
    Integer(i64),
    /// UTF-8 string, e.g. a budget or category name
    Text(String),
}

impl StoreValue {
    /// Borrow the string content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Copy out the integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StoreValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Copy out the boolean content, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StoreValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Human-readable name of the value's shape, for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            StoreValue::Flag(_) => "flag",
            StoreValue::Integer(_) => "integer",
            StoreValue::Text(_) => "text",
        }
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Flag(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Integer(value)
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::Text(value)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Text(value.to_string())
    }
}

/// Read capability over the shared store.
///
/// This is the only dependency the snapshot readers have. Implementations
/// must be thread-safe: tier renderers may read concurrently with each
/// other and with an in-progress write from the application side.
///
/// The defaulted getters mirror the platform preference APIs the widgets
/// were built against: a missing key or a value of the wrong shape resolves
/// to the caller's default, never to an error. Widgets always render
/// something.
pub trait SnapshotStore: Send + Sync {
    /// Fetch the raw value for a key.
    ///
    /// # Returns
    /// * `Some(value)` - the latest completed write for this key
    /// * `None` - the key is absent
    fn get(&self, key: &str) -> Option<StoreValue>;

    /// Read a string value, or `default` when the key is missing or holds
    /// a non-string value.
    fn string_or(&self, key: &str, default: &str) -> String {
        let Some(value) = self.get(key) else {
            return default.to_string();
        };
        match value.as_text() {
            Some(text) => text.to_string(),
            None => {
                log::debug!(
                    "key {key:?} holds a {} value where text was expected, using default",
                    value.type_name()
                );
                default.to_string()
            }
        }
    }

    /// Read an integer value, or `default` when the key is missing or holds
    /// a non-integer value.
    fn int_or(&self, key: &str, default: i64) -> i64 {
        let Some(value) = self.get(key) else {
            return default;
        };
        match value.as_integer() {
            Some(number) => number,
            None => {
                log::debug!(
                    "key {key:?} holds a {} value where an integer was expected, using default",
                    value.type_name()
                );
                default
            }
        }
    }

    /// Read a boolean value, or `default` when the key is missing or holds
    /// a non-boolean value.
    fn bool_or(&self, key: &str, default: bool) -> bool {
        let Some(value) = self.get(key) else {
            return default;
        };
        match value.as_flag() {
            Some(flag) => flag,
            None => {
                log::debug!(
                    "key {key:?} holds a {} value where a flag was expected, using default",
                    value.type_name()
                );
                default
            }
        }
    }
}

/// Write capability over the shared store.
///
/// The application side of the contract. Writes take `&self`: stores use
/// interior mutability so a single handle can be shared between the writer
/// and concurrent readers, matching the platform stores this models.
pub trait SnapshotStoreMut: SnapshotStore {
    /// Write a single key.
    ///
    /// Each write is atomic per key: a concurrent reader observes either
    /// the previous value or the new one, never a mix. Cross-key atomicity
    /// is not guaranteed; readers must use each field as given.
    fn put(&self, key: &str, value: StoreValue);

    /// Remove a key, so subsequent reads fall back to their defaults.
    fn remove(&self, key: &str);
}
