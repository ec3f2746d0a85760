//! Startup selection of the storage backend.

use std::sync::Arc;

use tracing::info;

use crate::storage::{
    backend::{Backend, LocalBackend},
    host::{HostBackend, HostChannel},
    store::KeyValueStore,
};

/// Chooses the backend for this process.
///
/// A present host channel means the editor runs embedded and the host owns
/// persistence; otherwise settings go to the local store.
///
/// # Arguments
///
/// * `host_channel` - Channel to the controlling host, if embedded
/// * `local_store` - Device store used when no host channel is present
///
/// # Returns
///
/// The backend to use for the rest of the process lifetime.
pub fn select_backend(
    host_channel: Option<Arc<dyn HostChannel>>,
    local_store: Arc<dyn KeyValueStore>,
) -> Backend {
    let backend = match host_channel {
        Some(channel) => Backend::HostMessaging(HostBackend::new(channel)),
        None => Backend::Local(LocalBackend::new(local_store)),
    };
    info!("Selected {} settings backend", backend.kind());
    backend
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_channel::unbounded;

    use crate::storage::{
        backend::{BackendKind, StorageBackend},
        host::{HostChannel, HostMessage},
        selector::select_backend,
        store::MemoryStore,
    };

    #[test]
    fn test_selects_local_without_host() {
        let store = Arc::new(MemoryStore::with_items([("theme", "dark")]));
        let backend = select_backend(None, store);

        assert_eq!(backend.kind(), BackendKind::Local);
        assert_eq!(backend.read("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_selects_host_when_channel_present() {
        let (tx, _rx) = unbounded::<HostMessage>();
        let channel: Arc<dyn HostChannel> = Arc::new(tx);
        let store = Arc::new(MemoryStore::with_items([("theme", "dark")]));

        let backend = select_backend(Some(channel), store);

        assert_eq!(backend.kind(), BackendKind::HostMessaging);
        assert_eq!(backend.read("theme"), None);
    }
}
