//! Store location following the XDG Base Directory specification.

use std::{env::var, path::PathBuf};

/// Directory name used under the XDG config home.
pub const APP_DIR_NAME: &str = "editor-settings";

/// File name of the local settings store.
pub const STORE_FILE_NAME: &str = "settings.json";

/// Returns the path of the local settings store file.
///
/// # Returns
///
/// `$XDG_CONFIG_HOME/editor-settings/settings.json`, falling back to
/// `$HOME/.config` and finally to the current directory.
#[must_use]
pub fn get_store_path() -> PathBuf {
    let mut path = get_xdg_config_home();
    path.push(APP_DIR_NAME);
    path.push(STORE_FILE_NAME);
    path
}

/// Gets the XDG config home directory.
///
/// Uses `XDG_CONFIG_HOME` if set and non-empty, otherwise `$HOME/.config`.
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use crate::config::paths::{APP_DIR_NAME, STORE_FILE_NAME, get_store_path};

    #[test]
    fn test_store_path_layout() {
        let path = get_store_path();
        assert!(path.ends_with(format!("{APP_DIR_NAME}/{STORE_FILE_NAME}")));
    }
}
