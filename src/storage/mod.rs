//! Settings persistence: local stores, the host channel, and backend selection.
//!
//! Exactly one [`Backend`] is selected at startup by [`select_backend`] and
//! shared by every setting for the rest of the process lifetime.

pub mod backend;
pub mod host;
pub mod selector;
pub mod store;

pub use {
    backend::{Backend, BackendKind, LocalBackend, StorageBackend},
    host::{CHANGE_SETTING_COMMAND, ChangeSetting, HostBackend, HostChannel, HostMessage},
    selector::select_backend,
    store::{FileStore, KeyValueStore, MemoryStore},
};
