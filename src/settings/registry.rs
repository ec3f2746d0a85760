//! The settings registry: every declared setting, wired to one backend.
//!
//! Construction reads each persisted setting once from the backend, falls
//! back to the documented default, and registers a persistence callback so
//! later changes are written through. All changes, including session-only
//! ones, are also published on a registry-wide change feed.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use {
    async_channel::Receiver,
    serde_json::{Map, Value, from_value},
    tracing::{debug, warn},
};

use crate::{
    error::SettingsError,
    settings::{
        application::EditorApplication,
        defaults, keys,
        setting::{AnySetting, Persistence, Setting},
        snapshot::SettingsSnapshot,
        value::{SettingType, SettingValue},
    },
    state::ChangeFeed,
    storage::{HostChannel, KeyValueStore, StorageBackend, select_backend},
};

/// A change to one setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEvent {
    /// Storage key of the setting.
    pub key: &'static str,
    /// New value.
    pub value: SettingValue,
}

/// Owns all editor settings.
pub struct SettingsRegistry {
    /// Active theme name.
    pub theme: Setting<String>,
    /// UI language code.
    pub language: Setting<String>,
    /// Workspace redraw throttle in milliseconds.
    pub redraw_throttle: Setting<i64>,
    /// Spellchecking.
    pub spellcheck_enabled: Setting<bool>,
    /// Transcription. Never persisted.
    pub transcribe_enabled: Setting<bool>,
    /// Tag autocompletion.
    pub complete_tags_enabled: Setting<bool>,
    /// Word autocompletion.
    pub complete_words_enabled: Setting<bool>,
    /// Night mode.
    pub night_mode_enabled: Setting<bool>,
    /// Automatic creation of linked nodes.
    pub create_nodes_enabled: Setting<bool>,
    /// Editor statistics panel.
    pub editor_stats_enabled: Setting<bool>,
    /// Markup language of node bodies.
    pub markup_language: Setting<String>,
    application: Arc<dyn EditorApplication>,
    feed: ChangeFeed<SettingEvent>,
}

impl Debug for SettingsRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SettingsRegistry")
            .field("settings", &self.snapshot())
            .field("subscribers", &self.feed.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl SettingsRegistry {
    /// Declares every setting against `backend`.
    ///
    /// # Arguments
    ///
    /// * `application` - Application the settings are applied to
    /// * `backend` - Backend shared by all persisted settings
    ///
    /// # Returns
    ///
    /// A registry with every setting loaded and persistence wired.
    pub fn new(
        application: Arc<dyn EditorApplication>,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        let feed = ChangeFeed::new();
        let declarer = Declarer {
            backend: &backend,
            feed: &feed,
        };

        let registry = Self {
            theme: declarer.persisted(keys::THEME, defaults::THEME.to_string()),
            language: declarer.persisted(keys::LANGUAGE, defaults::LANGUAGE.to_string()),
            redraw_throttle: declarer.persisted(keys::REDRAW_THROTTLE, defaults::REDRAW_THROTTLE),
            spellcheck_enabled: declarer
                .persisted(keys::SPELLCHECK_ENABLED, defaults::SPELLCHECK_ENABLED),
            transcribe_enabled: declarer
                .session_only(keys::TRANSCRIBE_ENABLED, defaults::TRANSCRIBE_ENABLED),
            complete_tags_enabled: declarer
                .persisted(keys::COMPLETE_TAGS_ENABLED, defaults::COMPLETE_TAGS_ENABLED),
            complete_words_enabled: declarer
                .persisted(keys::COMPLETE_WORDS_ENABLED, defaults::COMPLETE_WORDS_ENABLED),
            night_mode_enabled: declarer
                .persisted(keys::NIGHT_MODE_ENABLED, defaults::NIGHT_MODE_ENABLED),
            create_nodes_enabled: declarer
                .persisted(keys::CREATE_NODES_ENABLED, defaults::CREATE_NODES_ENABLED),
            editor_stats_enabled: declarer
                .persisted(keys::EDITOR_STATS_ENABLED, defaults::EDITOR_STATS_ENABLED),
            markup_language: declarer
                .persisted(keys::MARKUP_LANGUAGE, defaults::MARKUP_LANGUAGE.to_string()),
            application,
            feed,
        };

        debug!("SettingsRegistry: Declared {} settings", keys::ALL.len());
        registry
    }

    /// Selects the backend for this environment and builds the registry on it.
    ///
    /// # Arguments
    ///
    /// * `application` - Application the settings are applied to
    /// * `host_channel` - Channel to the controlling host, if embedded
    /// * `local_store` - Device store used when not embedded
    pub fn from_environment(
        application: Arc<dyn EditorApplication>,
        host_channel: Option<Arc<dyn HostChannel>>,
        local_store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let backend = select_backend(host_channel, local_store);
        Self::new(application, Arc::new(backend))
    }

    /// Pushes theme, language, night mode and redraw throttle into the application.
    pub fn apply(&self) {
        let theme = self.theme.get();
        let language = self.language.get();
        let throttle = self.redraw_throttle.get();
        debug!(
            "Applying settings: theme={}, language={}, throttle={}",
            theme, language, throttle
        );

        self.application.set_theme(&theme);
        self.application.set_language(&language);
        self.application.toggle_night_mode();
        self.application.workspace().set_throttle(throttle);
    }

    /// Subscribes to changes of any setting.
    pub fn subscribe(&self) -> Receiver<SettingEvent> {
        self.feed.subscribe()
    }

    /// Lists every setting in declaration order.
    #[must_use]
    pub fn settings(&self) -> [&dyn AnySetting; 11] {
        [
            &self.theme,
            &self.language,
            &self.redraw_throttle,
            &self.spellcheck_enabled,
            &self.transcribe_enabled,
            &self.complete_tags_enabled,
            &self.complete_words_enabled,
            &self.night_mode_enabled,
            &self.create_nodes_enabled,
            &self.editor_stats_enabled,
            &self.markup_language,
        ]
    }

    /// Lists every key in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.settings().iter().map(|setting| setting.key()).collect()
    }

    /// Looks up a setting by key.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnknownKey` if no setting uses `key`.
    pub fn setting(&self, key: &str) -> Result<&dyn AnySetting, SettingsError> {
        self.settings()
            .into_iter()
            .find(|setting| setting.key() == key)
            .ok_or_else(|| SettingsError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// Gets the current value of a setting by key.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnknownKey` if no setting uses `key`.
    pub fn get_value(&self, key: &str) -> Result<SettingValue, SettingsError> {
        Ok(self.setting(key)?.value())
    }

    /// Sets a setting by key.
    ///
    /// # Returns
    ///
    /// `true` if the value changed.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the key is unknown or the type is wrong.
    pub fn set_value(&self, key: &str, value: &SettingValue) -> Result<bool, SettingsError> {
        self.setting(key)?.set_value(value)
    }

    /// Parses raw input and sets a setting by key.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the key is unknown or the input does not parse.
    pub fn set_from_str(&self, key: &str, raw: &str) -> Result<bool, SettingsError> {
        self.setting(key)?.set_from_str(raw)
    }

    /// Applies a settings object pushed by the host.
    ///
    /// Unknown keys and mistyped values are logged and skipped.
    ///
    /// # Returns
    ///
    /// The number of entries accepted.
    pub fn apply_host_state(&self, state: &Map<String, Value>) -> usize {
        let mut accepted = 0;

        for (key, raw) in state {
            let result = from_value::<SettingValue>(raw.clone())
                .map_err(|e| SettingsError::InvalidValue {
                    key: key.clone(),
                    reason: e.to_string(),
                })
                .and_then(|value| self.set_value(key, &value));

            match result {
                Ok(_) => accepted += 1,
                Err(e) => warn!("Ignoring host setting {}: {}", key, e),
            }
        }

        debug!("Applied {} of {} host settings", accepted, state.len());
        accepted
    }

    /// Copies all current values.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            theme: self.theme.get(),
            language: self.language.get(),
            redraw_throttle: self.redraw_throttle.get(),
            spellcheck_enabled: self.spellcheck_enabled.get(),
            transcribe_enabled: self.transcribe_enabled.get(),
            complete_tags_enabled: self.complete_tags_enabled.get(),
            complete_words_enabled: self.complete_words_enabled.get(),
            night_mode_enabled: self.night_mode_enabled.get(),
            create_nodes_enabled: self.create_nodes_enabled.get(),
            editor_stats_enabled: self.editor_stats_enabled.get(),
            markup_language: self.markup_language.get(),
        }
    }
}

/// Declares settings against one backend and change feed.
struct Declarer<'a> {
    backend: &'a Arc<dyn StorageBackend>,
    feed: &'a ChangeFeed<SettingEvent>,
}

impl Declarer<'_> {
    fn persisted<T: SettingType>(&self, key: &'static str, default: T) -> Setting<T> {
        self.declare(key, default, Persistence::Persisted)
    }

    fn session_only<T: SettingType>(&self, key: &'static str, default: T) -> Setting<T> {
        self.declare(key, default, Persistence::SessionOnly)
    }

    fn declare<T: SettingType>(
        &self,
        key: &'static str,
        default: T,
        persistence: Persistence,
    ) -> Setting<T> {
        let setting = Setting::load(key, default, persistence, self.backend);

        let feed = self.feed.clone();
        setting.on_change(move |value: &T| {
            feed.broadcast(&SettingEvent {
                key,
                value: value.to_value(),
            });
        });

        setting
    }
}
