//! Configuration of where the local settings store lives.
//!
//! This module resolves the XDG-compliant location of the JSON file that
//! backs the local key-value store.

pub mod paths;

pub use paths::{APP_DIR_NAME, STORE_FILE_NAME, get_store_path};
