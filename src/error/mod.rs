//! Error handling using `thiserror` and `anyhow`.
//!
//! Domain errors describe the crate's few fallible surfaces precisely, while
//! the operational layer logs and renders failures that are not returned.

pub mod domain;
pub mod operational;

pub use {
    domain::{SettingsError, StoreError},
    operational::ErrorReporter,
};
