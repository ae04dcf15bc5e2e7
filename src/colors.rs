//! Color configuration: which fill colors each language icon is drawn with.
//!
//! The configuration is a JSON object mapping language codes to lists of
//! up to three hex colors:
//!
//! ```json
//! { "en": ["#012169", "#C8102E"], "fr": ["#0055A4", "#FFFFFF", "#EF4135"] }
//! ```
//!
//! It is parsed once at startup into an immutable [`ColorConfig`].

use crate::error::IconError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Most colors a single icon can carry (one per template variant).
pub const MAX_COLORS: usize = 3;

/// A non-empty language identifier, kept exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Result<Self, IconError> {
        let code = code.into();
        if code.is_empty() {
            return Err(IconError::EmptyLanguageCode);
        }
        // The code names the output file, so it must stay a single path component
        if code.contains(['/', '\\']) || code.contains("..") {
            return Err(IconError::InvalidLanguageCode(code));
        }
        Ok(Self(code))
    }

    /// The code as it appears in the configuration (used for file names).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The uppercase form drawn on the icon.
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered fill colors for one language, between zero and three entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorList(Vec<String>);

impl ColorList {
    pub fn new(code: &LanguageCode, colors: Vec<String>) -> Result<Self, IconError> {
        if colors.len() > MAX_COLORS {
            return Err(IconError::TooManyColors {
                code: code.to_string(),
                count: colors.len(),
            });
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether any color is pure white, which needs a stroke on the label.
    pub fn contains_white(&self) -> bool {
        self.iter().any(|color| color.eq_ignore_ascii_case("#ffffff"))
    }
}

/// The color file as written, before codes and list lengths are checked.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawColorConfig(BTreeMap<String, Vec<String>>);

/// All configured languages and their colors, sorted by code.
#[derive(Debug, Clone, Default)]
pub struct ColorConfig {
    entries: BTreeMap<LanguageCode, ColorList>,
}

impl ColorConfig {
    /// Parse a JSON color configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let RawColorConfig(raw) =
            serde_json::from_str(json).context("Failed to parse color configuration")?;
        Self::from_entries(raw)
    }

    /// Load a JSON color configuration from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read color configuration {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid color configuration {}", path.display()))
    }

    /// Build a configuration from raw `(code, colors)` pairs, validating each.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (code, colors) in entries {
            let code = LanguageCode::new(code)?;
            let colors = ColorList::new(&code, colors)?;
            map.insert(code, colors);
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colors for a code; the lookup is case-insensitive.
    pub fn get(&self, code: &str) -> Option<(&LanguageCode, &ColorList)> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str().eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &ColorList)> {
        self.entries.iter()
    }
}
