//! Setting value types and the string codec used at the storage boundary.
//!
//! Stores only ever hold strings. Every setting type implements
//! [`SettingType`], which decides how a value is encoded for storage, how a
//! stored string is decoded back, and what happens when decoding fails.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Canonical token for a stored `true` boolean.
pub const TRUE_TOKEN: &str = "true";

/// Canonical token for a stored `false` boolean.
pub const FALSE_TOKEN: &str = "false";

/// Declared type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// `bool` setting.
    Boolean,
    /// `i64` setting.
    Integer,
    /// `String` setting.
    String,
}

impl Display for SettingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

/// A dynamically typed setting value.
///
/// Serialized untagged, so JSON carries `true`, `50` or `"classic"` directly.
/// This is also the shape of `newValue` in host channel messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// String value.
    Text(String),
}

impl SettingValue {
    /// Returns the type of this value.
    #[must_use]
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Bool(_) => SettingKind::Boolean,
            Self::Integer(_) => SettingKind::Integer,
            Self::Text(_) => SettingKind::String,
        }
    }

    /// Encodes the value as the string a local store keeps.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        match self {
            Self::Bool(value) => value.encode(),
            Self::Integer(value) => value.encode(),
            Self::Text(value) => value.clone(),
        }
    }
}

impl Display for SettingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_storage_string())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Codec between a typed setting value and its stored string form.
pub trait SettingType: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Declared type tag.
    const KIND: SettingKind;

    /// Encodes the value for a string store.
    fn encode(&self) -> String;

    /// Decodes a stored string.
    ///
    /// `None` means the stored string is unusable and the setting falls back
    /// to its default.
    fn decode(raw: &str) -> Option<Self>;

    /// Parses user input. Stricter than [`SettingType::decode`] where the
    /// stored form is lenient.
    fn parse(raw: &str) -> Option<Self> {
        Self::decode(raw)
    }

    /// Wraps the value in a [`SettingValue`].
    fn to_value(&self) -> SettingValue;

    /// Extracts a typed value, `None` on a type mismatch.
    fn from_value(value: &SettingValue) -> Option<Self>;
}

impl SettingType for bool {
    const KIND: SettingKind = SettingKind::Boolean;

    fn encode(&self) -> String {
        let token = if *self { TRUE_TOKEN } else { FALSE_TOKEN };
        token.to_string()
    }

    // Anything but the exact token reads as false.
    fn decode(raw: &str) -> Option<Self> {
        Some(raw == TRUE_TOKEN)
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            TRUE_TOKEN => Some(true),
            FALSE_TOKEN => Some(false),
            _ => None,
        }
    }

    fn to_value(&self) -> SettingValue {
        SettingValue::Bool(*self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl SettingType for i64 {
    const KIND: SettingKind = SettingKind::Integer;

    fn encode(&self) -> String {
        self.to_string()
    }

    // Reads the leading digits, so "10px" is 10 and "12.5" is 12.
    fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim_start();
        let sign_len = usize::from(raw.starts_with(['+', '-']));
        let digits = raw[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        raw[..sign_len + digits].parse().ok()
    }

    fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    fn to_value(&self) -> SettingValue {
        SettingValue::Integer(*self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl SettingType for String {
    const KIND: SettingKind = SettingKind::String;

    fn encode(&self) -> String {
        self.clone()
    }

    // An empty stored string counts as unset.
    fn decode(raw: &str) -> Option<Self> {
        (!raw.is_empty()).then(|| raw.to_string())
    }

    fn parse(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_value(&self) -> SettingValue {
        SettingValue::Text(self.clone())
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Text(value) => Some(value.clone()),
            _ => None,
        }
    }
}
