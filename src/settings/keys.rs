//! Storage keys of the declared settings.

pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "language";
pub const REDRAW_THROTTLE: &str = "redrawThrottle";
pub const SPELLCHECK_ENABLED: &str = "spellcheckEnabled";
pub const TRANSCRIBE_ENABLED: &str = "transcribeEnabled";
pub const COMPLETE_TAGS_ENABLED: &str = "completeTagsEnabled";
pub const COMPLETE_WORDS_ENABLED: &str = "completeWordsEnabled";
pub const NIGHT_MODE_ENABLED: &str = "nightModeEnabled";
pub const CREATE_NODES_ENABLED: &str = "createNodesEnabled";
pub const EDITOR_STATS_ENABLED: &str = "editorStatsEnabled";
pub const MARKUP_LANGUAGE: &str = "markupLanguage";

/// All keys in declaration order.
pub const ALL: [&str; 11] = [
    THEME,
    LANGUAGE,
    REDRAW_THROTTLE,
    SPELLCHECK_ENABLED,
    TRANSCRIBE_ENABLED,
    COMPLETE_TAGS_ENABLED,
    COMPLETE_WORDS_ENABLED,
    NIGHT_MODE_ENABLED,
    CREATE_NODES_ENABLED,
    EDITOR_STATS_ENABLED,
    MARKUP_LANGUAGE,
];
