//! Language selection and per-language rule profiles.

mod profile;
pub(crate) mod tables;

pub use profile::{LanguageProfile, Thresholds};

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Supported transcript languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English rules
    #[default]
    English,
    /// Spanish rules (inverted punctuation, `.de` exclusion, appositions)
    Spanish,
    /// French rules
    French,
    /// German rules (structural participle detection)
    German,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    /// Get the ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "es" | "spa" | "spanish" => Ok(Language::Spanish),
            "fr" | "fra" | "french" => Ok(Language::French),
            "de" | "deu" | "ger" | "german" => Ok(Language::German),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("GERMAN".parse::<Language>().unwrap(), Language::German);
        assert_eq!(Language::French.code(), "fr");
        assert!("xx".parse::<Language>().is_err());
    }
}
