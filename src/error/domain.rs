//! Domain-specific error types using `thiserror`.
//!
//! This module defines the error enums for the two fallible surfaces of the
//! crate: opening the local file store and key-addressed settings access.

use std::io::Error as StdIoError;

use {serde_json::Error as SerdeJsonError, thiserror::Error};

use crate::settings::SettingKind;

/// Local store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the store file.
    #[error("IO error: {0}")]
    IoError(#[from] StdIoError),
    /// Store file contents are not a flat JSON object of strings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// Key-addressed settings access errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// No setting is declared under this key.
    #[error("Unknown setting: {key}")]
    UnknownKey { key: String },
    /// Value type does not match the declared setting type.
    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: SettingKind,
        actual: SettingKind,
    },
    /// Raw input could not be parsed as the declared setting type.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
