//! The storage capability the settings registry persists through.

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::debug;

use crate::{
    settings::SettingValue,
    storage::{host::HostBackend, store::KeyValueStore},
};

/// Minimal read/write capability over string-keyed settings.
pub trait StorageBackend: Debug + Send + Sync {
    /// Returns the stored string for `key`, or `None` if absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Persists a new value for `key`. Never fails observably.
    fn write(&self, key: &str, value: &SettingValue);
}

/// Which backend variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Device-local key-value store.
    Local,
    /// Message channel to a controlling host.
    HostMessaging,
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Local => f.write_str("local"),
            Self::HostMessaging => f.write_str("host-messaging"),
        }
    }
}

/// Backend over a local key-value store. Reads and writes are synchronous.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: Arc<dyn KeyValueStore>,
}

impl LocalBackend {
    /// Binds the backend to a local store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl StorageBackend for LocalBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.store.get_item(key)
    }

    fn write(&self, key: &str, value: &SettingValue) {
        debug!("Storing {} = {}", key, value);
        self.store.set_item(key, &value.to_storage_string());
    }
}

/// The single backend selected for the process lifetime.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Local variant.
    Local(LocalBackend),
    /// Host-messaging variant.
    HostMessaging(HostBackend),
}

impl Backend {
    /// Returns the active variant.
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Local(_) => BackendKind::Local,
            Self::HostMessaging(_) => BackendKind::HostMessaging,
        }
    }
}

impl StorageBackend for Backend {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(backend) => backend.read(key),
            Self::HostMessaging(backend) => backend.read(key),
        }
    }

    fn write(&self, key: &str, value: &SettingValue) {
        match self {
            Self::Local(backend) => backend.write(key, value),
            Self::HostMessaging(backend) => backend.write(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        settings::SettingValue,
        storage::{
            backend::{LocalBackend, StorageBackend},
            store::{KeyValueStore, MemoryStore},
        },
    };

    #[test]
    fn test_local_write_is_immediately_readable() {
        let store = Arc::new(MemoryStore::new());
        let backend = LocalBackend::new(store.clone());

        backend.write("spellcheckEnabled", &SettingValue::Bool(false));

        assert_eq!(backend.read("spellcheckEnabled").as_deref(), Some("false"));
        assert_eq!(store.get_item("spellcheckEnabled").as_deref(), Some("false"));
    }

    #[test]
    fn test_local_encodes_integers_as_strings() {
        let store = Arc::new(MemoryStore::new());
        let backend = LocalBackend::new(store);

        backend.write("redrawThrottle", &SettingValue::Integer(75));
        assert_eq!(backend.read("redrawThrottle").as_deref(), Some("75"));
    }
}
