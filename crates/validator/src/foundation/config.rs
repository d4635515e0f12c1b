//! Validator configuration
//!
//! A [`ValidatorConfig`] is fixed when a builder is created and copied into
//! every rule registered on it. It is plain data, so it can be kept next to
//! the rest of an application's settings:
//!
//! ```json
//! { "length_mode": "bytes", "name_style": "spaced", "cascade": "stop" }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use super::ValidatorError;

// ============================================================================
// VALIDATOR CONFIG
// ============================================================================

/// Settings shared by every rule of one builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How the length checks count characters.
    pub length_mode: LengthMode,
    /// How display names are derived from property selectors.
    pub name_style: NameStyle,
    /// Whether a rule keeps running checks after one fails.
    pub cascade: CascadeMode,
}

impl ValidatorConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets the display name style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.name_style = style;
        self
    }

    /// Sets the cascade mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cascade(mut self, cascade: CascadeMode) -> Self {
        self.cascade = cascade;
        self
    }
}

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures `input` according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NAME STYLE
// ============================================================================

/// How a selector segment becomes the display name used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// `first_name` → `FirstName`, `userInfo` → `UserInfo`.
    #[default]
    Pascal,
    /// `first_name` → `First Name`.
    Spaced,
    /// Segment used as written.
    Verbatim,
}

impl NameStyle {
    /// Renders a selector segment as a display name.
    pub fn apply(self, segment: &str) -> String {
        match self {
            Self::Verbatim => segment.to_owned(),
            Self::Pascal => words(segment).map(capitalize).collect(),
            Self::Spaced => words(segment).map(capitalize).collect::<Vec<_>>().join(" "),
        }
    }
}

fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment.split('_').filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// CASCADE MODE
// ============================================================================

/// Whether checks after a failing one still run within the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeMode {
    /// Run every check.
    #[default]
    Continue,
    /// Stop the rule at its first failing check.
    Stop,
}
