//! Supported conversation languages

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language entry: short code, English pronunciations and synthesis voice
///
/// The first pronunciation is the canonical display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable aliases, canonical name first
    pub pronunciations_en: Vec<String>,
    /// Locale code (e.g. "fr-FR")
    pub short_code: String,
    /// Text-to-speech voice identifier
    pub voice: String,
}

impl LanguageEntry {
    /// Create an entry
    pub fn new<C, V>(short_code: C, pronunciations_en: &[&str], voice: V) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            pronunciations_en: pronunciations_en.iter().map(|p| (*p).to_string()).collect(),
            short_code: short_code.into(),
            voice: voice.into(),
        }
    }

    /// Canonical display name
    pub fn human_name(&self) -> &str {
        self.pronunciations_en
            .first()
            .map_or(self.short_code.as_str(), String::as_str)
    }

    /// Check the entry carries a code and at least one alias
    pub fn validate(&self) -> Result<()> {
        if self.short_code.trim().is_empty() {
            return Err(Error::configuration("Language short code cannot be empty"));
        }
        if self.pronunciations_en.is_empty() {
            return Err(Error::configuration(format!(
                "Language {} needs at least one pronunciation",
                self.short_code
            )));
        }
        Ok(())
    }
}

// Short code only, for logs
impl fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_code)
    }
}
