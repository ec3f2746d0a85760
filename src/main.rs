//! Editor Settings - command-line front end
//!
//! Inspects and edits the settings held in the local store, the same store
//! an editor running outside a host reads at startup.

use std::{env::args, process::ExitCode, sync::Arc};

use {
    anyhow::{Context, Result, bail},
    serde_json::to_string_pretty,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use editor_settings::{
    EditorApplication, FileStore, SettingsRegistry, Workspace, error::ErrorReporter,
    settings::AnySetting,
};

const USAGE: &str =
    "usage: editor-settings <list | get KEY | set KEY VALUE | reset KEY | apply | path>";

/// Application stand-in that logs what would be applied.
struct HeadlessApplication;

impl Workspace for HeadlessApplication {
    fn set_throttle(&self, milliseconds: i64) {
        info!("Redraw throttle: {} ms", milliseconds);
    }
}

impl EditorApplication for HeadlessApplication {
    fn set_theme(&self, theme: &str) {
        info!("Theme: {}", theme);
    }

    fn set_language(&self, language: &str) {
        info!("Language: {}", language);
    }

    fn toggle_night_mode(&self) {
        info!("Night mode re-evaluated");
    }

    fn workspace(&self) -> &dyn Workspace {
        self
    }
}

fn run(arguments: &[String]) -> Result<()> {
    let store = Arc::new(FileStore::open().context("Failed to open settings store")?);
    let path = store.path().to_path_buf();
    let registry = SettingsRegistry::from_environment(Arc::new(HeadlessApplication), None, store);

    match arguments {
        [command] if command == "list" => {
            println!("{}", to_string_pretty(&registry.snapshot())?);
        }
        [command, key] if command == "get" => {
            println!("{}", registry.get_value(key)?);
        }
        [command, key, value] if command == "set" => {
            let changed = registry
                .set_from_str(key, value)
                .with_context(|| format!("Failed to set {key}"))?;
            if !changed {
                info!("{} already set to {}", key, value);
            }
        }
        [command, key] if command == "reset" => {
            let setting = registry.setting(key)?;
            setting.set_value(&setting.default_setting_value())?;
        }
        [command] if command == "apply" => registry.apply(),
        [command] if command == "path" => println!("{}", path.display()),
        _ => bail!(USAGE),
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let arguments: Vec<String> = args().skip(1).collect();
    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ErrorReporter::to_user_message(&e));
            ExitCode::FAILURE
        }
    }
}
