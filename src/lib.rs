//! Editor Settings - persistent, observable editor preferences
//!
//! Declares the editor's user-facing settings, loads them from either the
//! device's local key-value store or a message channel to a controlling
//! host, exposes each as an observable value, and writes every change back
//! through the selected backend.

pub mod config;
pub mod error;
pub mod settings;
pub mod state;
pub mod storage;

// Re-export key types for convenience
pub use {
    error::{SettingsError, StoreError},
    settings::{
        EditorApplication, SettingEvent, SettingKind, SettingValue, SettingsRegistry,
        SettingsSnapshot, Workspace,
    },
    state::Observable,
    storage::{
        Backend, BackendKind, FileStore, HostChannel, HostMessage, KeyValueStore, MemoryStore,
        StorageBackend, select_backend,
    },
};
