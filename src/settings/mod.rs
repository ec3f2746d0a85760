//! Editor settings: declarations, codecs and the registry that owns them.
//!
//! [`SettingsRegistry`] is the entry point. Each setting is an observable
//! value, pre-populated from the selected storage backend and persisted back
//! through it on every change.

pub mod application;
pub mod defaults;
pub mod keys;
pub mod registry;
pub mod setting;
pub mod snapshot;
pub mod value;


pub use {
    application::{EditorApplication, Workspace},
    registry::{SettingEvent, SettingsRegistry},
    setting::{AnySetting, Persistence, Setting},
    snapshot::SettingsSnapshot,
    value::{SettingKind, SettingType, SettingValue},
};
