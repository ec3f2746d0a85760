//! A single named, typed, observable setting with a persistence policy.

use std::sync::Arc;

use {
    async_channel::Receiver,
    tracing::{debug, warn},
};

use crate::{
    error::SettingsError,
    settings::value::{SettingKind, SettingType, SettingValue},
    state::Observable,
    storage::StorageBackend,
};

/// Whether a setting is read from and written to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Initial value comes from the backend; every change is written back.
    Persisted,
    /// Always starts at the default and never touches the backend.
    SessionOnly,
}

/// Observable setting bound to a storage key.
#[derive(Debug, Clone)]
pub struct Setting<T> {
    key: &'static str,
    default: T,
    persistence: Persistence,
    value: Observable<T>,
}

impl<T: SettingType> Setting<T> {
    /// Resolves the initial value and wires persistence.
    ///
    /// # Arguments
    ///
    /// * `key` - Storage key
    /// * `default` - Value used when nothing usable is stored
    /// * `persistence` - Persistence policy
    /// * `backend` - Backend to read from and write through
    pub fn load(
        key: &'static str,
        default: T,
        persistence: Persistence,
        backend: &Arc<dyn StorageBackend>,
    ) -> Self {
        let initial = match persistence {
            Persistence::Persisted => resolve_initial(key, &default, backend.as_ref()),
            Persistence::SessionOnly => default.clone(),
        };
        let value = Observable::new(initial);

        if persistence == Persistence::Persisted {
            let backend = Arc::clone(backend);
            value.on_change(move |new_value: &T| backend.write(key, &new_value.to_value()));
        }

        debug!("Loaded setting {} = {:?} ({:?})", key, value.get(), persistence);

        Self {
            key,
            default,
            persistence,
            value,
        }
    }

    /// Storage key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Persistence policy.
    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Sets a new value, persisting it if it changed.
    ///
    /// # Returns
    ///
    /// `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        self.value.set(value)
    }

    /// Registers a callback run after every change.
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.value.on_change(callback);
    }

    /// Subscribes to future values.
    pub fn subscribe(&self) -> Receiver<T> {
        self.value.subscribe()
    }
}

fn resolve_initial<T: SettingType>(key: &str, default: &T, backend: &dyn StorageBackend) -> T {
    let Some(raw) = backend.read(key) else {
        return default.clone();
    };

    T::decode(&raw).unwrap_or_else(|| {
        warn!(
            "Stored value {:?} for {} is not a valid {}, using default {:?}",
            raw,
            key,
            T::KIND,
            default
        );
        default.clone()
    })
}

/// Type-erased access to a setting, for key-addressed lookups.
pub trait AnySetting: Send + Sync {
    /// Storage key.
    fn key(&self) -> &'static str;

    /// Declared type.
    fn kind(&self) -> SettingKind;

    /// Persistence policy.
    fn persistence(&self) -> Persistence;

    /// Current value.
    fn value(&self) -> SettingValue;

    /// Documented default.
    fn default_setting_value(&self) -> SettingValue;

    /// Sets a dynamically typed value.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::TypeMismatch` if `value` has the wrong type.
    fn set_value(&self, value: &SettingValue) -> Result<bool, SettingsError>;

    /// Parses and sets raw user input.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if `raw` does not parse.
    fn set_from_str(&self, raw: &str) -> Result<bool, SettingsError>;
}

impl<T: SettingType> AnySetting for Setting<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn kind(&self) -> SettingKind {
        T::KIND
    }

    fn persistence(&self) -> Persistence {
        self.persistence
    }

    fn value(&self) -> SettingValue {
        self.get().to_value()
    }

    fn default_setting_value(&self) -> SettingValue {
        self.default.to_value()
    }

    fn set_value(&self, value: &SettingValue) -> Result<bool, SettingsError> {
        let typed = T::from_value(value).ok_or_else(|| SettingsError::TypeMismatch {
            key: self.key.to_string(),
            expected: T::KIND,
            actual: value.kind(),
        })?;
        Ok(self.set(typed))
    }

    fn set_from_str(&self, raw: &str) -> Result<bool, SettingsError> {
        let typed = T::parse(raw).ok_or_else(|| SettingsError::InvalidValue {
            key: self.key.to_string(),
            reason: format!("{raw:?} is not a valid {}", T::KIND),
        })?;
        Ok(self.set(typed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        error::SettingsError,
        settings::{
            setting::{AnySetting, Persistence, Setting},
            value::{SettingKind, SettingValue},
        },
        storage::{LocalBackend, MemoryStore, StorageBackend},
    };

    fn backend_with(items: &[(&str, &str)]) -> Arc<dyn StorageBackend> {
        let store = Arc::new(MemoryStore::with_items(items.iter().copied()));
        Arc::new(LocalBackend::new(store))
    }

    #[test]
    fn test_load_falls_back_on_malformed_integer() {
        let backend = backend_with(&[("redrawThrottle", "soon")]);
        let setting = Setting::load("redrawThrottle", 50_i64, Persistence::Persisted, &backend);
        assert_eq!(setting.get(), 50);
    }

    #[test]
    fn test_session_only_ignores_stored_value() {
        let backend = backend_with(&[("transcribeEnabled", "true")]);
        let setting = Setting::load("transcribeEnabled", false, Persistence::SessionOnly, &backend);

        assert!(!setting.get());
        setting.set(true);
        setting.set(false);
        assert_eq!(backend.read("transcribeEnabled").as_deref(), Some("true"));
        assert_eq!(setting.persistence(), Persistence::SessionOnly);
    }

    #[test]
    fn test_reset_writes_default() {
        let backend = backend_with(&[("theme", "dark")]);
        let setting = Setting::load("theme", "classic".to_string(), Persistence::Persisted, &backend);

        assert_eq!(setting.get(), "dark");
        assert_eq!(setting.set_value(&setting.default_setting_value()), Ok(true));
        assert_eq!(backend.read("theme").as_deref(), Some("classic"));
    }

    #[test]
    fn test_set_value_checks_type() {
        let backend = backend_with(&[]);
        let setting = Setting::load("spellcheckEnabled", true, Persistence::Persisted, &backend);

        let error = setting.set_value(&SettingValue::Integer(1)).unwrap_err();
        assert_eq!(
            error,
            SettingsError::TypeMismatch {
                key: "spellcheckEnabled".to_string(),
                expected: SettingKind::Boolean,
                actual: SettingKind::Integer,
            }
        );

        assert_eq!(setting.set_value(&SettingValue::Bool(false)), Ok(true));
        assert!(!setting.get());
    }

    #[test]
    fn test_set_from_str_is_strict() {
        let backend = backend_with(&[]);
        let setting = Setting::load("redrawThrottle", 50_i64, Persistence::Persisted, &backend);

        assert!(matches!(
            setting.set_from_str("fast"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert_eq!(setting.set_from_str("25"), Ok(true));
        assert_eq!(setting.value(), SettingValue::Integer(25));
        assert_eq!(backend.read("redrawThrottle").as_deref(), Some("25"));
    }
}
