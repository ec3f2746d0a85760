//! Documented defaults, used whenever nothing usable is stored.

pub const THEME: &str = "classic";
pub const LANGUAGE: &str = "en-GB";
/// Milliseconds.
pub const REDRAW_THROTTLE: i64 = 50;
pub const SPELLCHECK_ENABLED: bool = true;
/// Session only, resets every launch.
pub const TRANSCRIBE_ENABLED: bool = false;
pub const COMPLETE_TAGS_ENABLED: bool = true;
pub const COMPLETE_WORDS_ENABLED: bool = true;
pub const NIGHT_MODE_ENABLED: bool = false;
pub const CREATE_NODES_ENABLED: bool = true;
pub const EDITOR_STATS_ENABLED: bool = false;
pub const MARKUP_LANGUAGE: &str = "bbcode";
