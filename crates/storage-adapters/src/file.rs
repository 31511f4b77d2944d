//! Single-file JSON implementation of `KeyValueStore`.
//!
//! The durable analog of per-origin browser storage: one JSON document
//! holding a `key -> value` map, loaded fully at open and rewritten in
//! full on every mutation. Collections are small (tens to low hundreds of
//! records), so whole-file rewrites stay cheap.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use domains::{KeyValueStore, Result, StoreError};
use serde_json::Value;

pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    /// A missing or corrupt file opens as an empty store; corruption is
    /// logged and the old content is abandoned on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, Value>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e,
                        "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            // A store that was never written is the normal first-run case;
            // any other read failure deserves the same warning as corruption.
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e,
                    "store file is unreadable, starting empty");
                BTreeMap::new()
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.clone());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}
