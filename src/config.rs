//! Summarizer configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Stemming language, one of the Snowball algorithms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemLanguage {
    /// Lowercase only, no stemming.
    None,
    #[default]
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Swedish,
    Russian,
}

impl FromStr for StemLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => StemLanguage::None,
            "english" | "en" => StemLanguage::English,
            "french" | "fr" => StemLanguage::French,
            "german" | "de" => StemLanguage::German,
            "spanish" | "es" => StemLanguage::Spanish,
            "italian" | "it" => StemLanguage::Italian,
            "portuguese" | "pt" => StemLanguage::Portuguese,
            "dutch" | "nl" => StemLanguage::Dutch,
            "swedish" | "sv" => StemLanguage::Swedish,
            "russian" | "ru" => StemLanguage::Russian,
            other => return Err(format!("unknown stemming language: {other}")),
        };
        Ok(language)
    }
}

/// Configuration for a [`Summarizer`](crate::Summarizer)
///
/// The threshold is not validated; values outside `[0, 1]` are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Minimum score a sentence needs to be kept (the first sentence is always kept)
    pub threshold: f64,
    /// Stemmer applied to every normalized term
    pub language: StemLanguage,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            language: StemLanguage::default(),
        }
    }
}
