//! File-backed snapshot store.
//!
//! This module provides the JsonFileStore implementation: a flat JSON object
//! on disk standing in for the platform key-value store during development
//! and preview. Loading is defensive at the key level, per the read
//! contract: a key whose value is not a string, a 64-bit integer, or a
//! boolean is dropped and later reads of it fall back to defaults, exactly
//! as a missing key would.
//!
//! The whole-file operations (`open`, `reload`, `save`) are the only
//! fallible paths; once loaded, reads and writes behave like
//! [`MemoryStore`](crate::store::MemoryStore).

use crate::error::{GlanceError, Result};
use crate::store::{SnapshotStore, SnapshotStoreMut, StoreValue};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Snapshot store persisted as a flat JSON object.
///
/// Concurrency guarantees (shared reads, per-key write atomicity) hold
/// within one process; `save` and `reload` are explicit whole-file
/// operations for handing snapshots between the writer tooling and the
/// preview host.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, StoreValue>>,
}

impl JsonFileStore {
    /// Open an existing store file and load its contents.
    ///
    /// # Errors
    /// * `StoreNotFound` - the file does not exist
    /// * `StoreFormat` - the file is not a flat JSON object
    /// * `StoreError` - the file could not be read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = load_values(&path)?;
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Bind an empty store to a path without touching the file system.
    ///
    /// Nothing is written until [`save`](Self::save) is called; an existing
    /// file at `path` is replaced by that first save.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the backing file, replacing the in-memory contents.
    ///
    /// Used by the preview host on its refresh cadence to pick up writes
    /// made by other processes.
    pub fn reload(&self) -> Result<()> {
        let fresh = load_values(&self.path)?;
        *self.values.write() = fresh;
        log::debug!("reloaded snapshot store from {}", self.path.display());
        Ok(())
    }

    /// Write the current contents to the backing file as pretty-printed
    /// JSON with sorted keys.
    pub fn save(&self) -> Result<()> {
        let ordered: BTreeMap<String, StoreValue> = self
            .values
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let body = serde_json::to_string_pretty(&ordered)
            .map_err(|err| GlanceError::store_format(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| {
            GlanceError::store_error(
                format!("Failed to write {}", self.path.display()),
                err,
            )
        })?;
        Ok(())
    }

    /// Last modification time of the backing file.
    ///
    /// Feeds the staleness display in the preview host; a store that was
    /// never saved has no modification time and reports an error here.
    pub fn modified(&self) -> Result<SystemTime> {
        let metadata = fs::metadata(&self.path).map_err(|err| {
            GlanceError::store_error(
                format!("Failed to stat {}", self.path.display()),
                err,
            )
        })?;
        Ok(metadata.modified()?)
    }
}

impl SnapshotStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<StoreValue> {
        self.values.read().get(key).cloned()
    }
}

impl SnapshotStoreMut for JsonFileStore {
    fn put(&self, key: &str, value: StoreValue) {
        self.values.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}

fn load_values(path: &Path) -> Result<HashMap<String, StoreValue>> {
    let body = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => GlanceError::StoreNotFound {
            path: path.to_path_buf(),
        },
        _ => GlanceError::store_error(format!("Failed to read {}", path.display()), err),
    })?;

    let parsed: serde_json::Value = serde_json::from_str(&body)
        .map_err(|err| GlanceError::store_format(format!("{}: {err}", path.display())))?;
    let object = match parsed {
        serde_json::Value::Object(object) => object,
        _ => {
            return Err(GlanceError::store_format(format!(
                "{}: top level is not an object",
                path.display()
            )))
        }
    };

    let mut values = HashMap::with_capacity(object.len());
    for (key, raw) in object {
        match store_value_from_json(&raw) {
            Some(value) => {
                values.insert(key, value);
            }
            None => {
                // Unsupported shapes (floats, nulls, nested structures) are
                // treated as absent keys, so reads default rather than fail.
                log::debug!("store key {key:?} holds unsupported JSON {raw}, skipping");
            }
        }
    }
    Ok(values)
}

fn store_value_from_json(raw: &serde_json::Value) -> Option<StoreValue> {
    match raw {
        serde_json::Value::Bool(value) => Some(StoreValue::Flag(*value)),
        serde_json::Value::Number(number) => number.as_i64().map(StoreValue::Integer),
        serde_json::Value::String(text) => Some(StoreValue::Text(text.clone())),
        _ => None,
    }
}
