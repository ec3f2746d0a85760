//! Local persistent key-value stores.
//!
//! A store is the device-side `getItem`/`setItem` capability: it only ever
//! holds strings, and type coercion is left to the settings registry.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use {
    anyhow::Error,
    parking_lot::RwLock,
    serde_json::{from_str, to_string_pretty},
    tracing::debug,
};

use crate::{
    config::get_store_path,
    error::{ErrorReporter, StoreError},
};

/// Synchronous string key-value store.
///
/// Writes are immediately visible to subsequent reads on the same store.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Returns the stored string for `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set_item(&self, key: &str, value: &str);
}

/// Volatile store, used for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.write().insert(key.to_string(), value.to_string());
    }
}

/// Store persisted as a flat JSON object of strings.
///
/// Every write rewrites the file before returning. A failed write is reported
/// and swallowed, and the value stays visible in memory for this session.
#[derive(Debug)]
pub struct FileStore {
    /// In-memory copy of the file contents.
    items: RwLock<BTreeMap<String, String>>,
    /// Path to the store file on disk.
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at the default XDG location.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed,
    /// or if its directory cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        Self::with_path(get_store_path())
    }

    /// Opens the store at a custom path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON store file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed,
    /// or if its directory cannot be created.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        let items = if path.exists() {
            debug!("Loading settings store from {:?}", path);
            from_str(&read_to_string(&path)?)?
        } else {
            debug!("No settings store at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self {
            items: RwLock::new(items),
            path,
        })
    }

    /// Gets the store file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        debug!("Saving settings store to {:?}", self.path);
        let contents = to_string_pretty(&*self.items.read())?;
        write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.write().insert(key.to_string(), value.to_string());

        if let Err(e) = self.save() {
            ErrorReporter::warn(&Error::from(e), &format!("persisting {key}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{read_to_string, write};

    use tempfile::TempDir;

    use crate::{
        error::StoreError,
        storage::store::{FileStore, KeyValueStore, MemoryStore},
    };

    #[test]
    fn test_memory_store_read_after_write() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("theme"), None);

        store.set_item("theme", "dark");
        assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_with_items() {
        let store = MemoryStore::with_items([("language", "de-DE")]);
        assert_eq!(store.get_item("language").as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_file_store_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let store = FileStore::with_path(&path).unwrap();
        assert_eq!(store.get_item("redrawThrottle"), None);
        store.set_item("redrawThrottle", "120");
        assert_eq!(store.get_item("redrawThrottle").as_deref(), Some("120"));

        let contents = read_to_string(&path).unwrap();
        assert!(contents.contains("\"redrawThrottle\": \"120\""));

        let reopened = FileStore::with_path(&path).unwrap();
        assert_eq!(reopened.get_item("redrawThrottle").as_deref(), Some("120"));
        assert_eq!(reopened.get_item("theme"), None);
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        write(&path, "{\"theme\": 3}").unwrap();

        let result = FileStore::with_path(&path);
        assert!(matches!(result, Err(StoreError::SerializationError(_))));
    }
}
