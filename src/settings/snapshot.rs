//! Serializable copy of every setting value.

use serde::{Deserialize, Serialize};

use crate::settings::defaults;

/// Point-in-time copy of all settings, keyed by their storage names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    /// Theme name.
    pub theme: String,
    /// UI language code.
    pub language: String,
    /// Redraw throttle in milliseconds.
    pub redraw_throttle: i64,
    /// Whether spellchecking is on.
    pub spellcheck_enabled: bool,
    /// Whether transcription is on (session only).
    pub transcribe_enabled: bool,
    /// Whether tag autocompletion is on.
    pub complete_tags_enabled: bool,
    /// Whether word autocompletion is on.
    pub complete_words_enabled: bool,
    /// Whether night mode is on.
    pub night_mode_enabled: bool,
    /// Whether linked nodes are created automatically.
    pub create_nodes_enabled: bool,
    /// Whether editor statistics are shown.
    pub editor_stats_enabled: bool,
    /// Markup language of node bodies.
    pub markup_language: String,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            theme: defaults::THEME.to_string(),
            language: defaults::LANGUAGE.to_string(),
            redraw_throttle: defaults::REDRAW_THROTTLE,
            spellcheck_enabled: defaults::SPELLCHECK_ENABLED,
            transcribe_enabled: defaults::TRANSCRIBE_ENABLED,
            complete_tags_enabled: defaults::COMPLETE_TAGS_ENABLED,
            complete_words_enabled: defaults::COMPLETE_WORDS_ENABLED,
            night_mode_enabled: defaults::NIGHT_MODE_ENABLED,
            create_nodes_enabled: defaults::CREATE_NODES_ENABLED,
            editor_stats_enabled: defaults::EDITOR_STATS_ENABLED,
            markup_language: defaults::MARKUP_LANGUAGE.to_string(),
        }
    }
}
