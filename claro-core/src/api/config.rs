//! Configuration API for transcript resolution

use std::str::FromStr;

use crate::api::Error;
use crate::language::{Language, Thresholds};

/// Resolution configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) use_domain_exclusions: bool,
    pub(crate) thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            use_domain_exclusions: true,
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.thresholds.validate().map_err(Error::Configuration)
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    use_domain_exclusions: Option<bool>,
    min_words_before_split: Option<usize>,
    min_transcript_words: Option<usize>,
    semantic_min_words: Option<usize>,
    semantic_threshold: Option<f32>,
    semantic_lookahead: Option<usize>,
    speaker_lookahead: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code ("en", "es", "fr", "de")
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Whether common-word labels are excluded from domain masking
    pub fn use_domain_exclusions(mut self, enabled: bool) -> Self {
        self.use_domain_exclusions = Some(enabled);
        self
    }

    /// Minimum chunk length before a recognizer boundary may split
    pub fn min_words_before_split(mut self, words: usize) -> Self {
        self.min_words_before_split = Some(words);
        self
    }

    /// Transcripts below this length never split on heuristics
    pub fn min_transcript_words(mut self, words: usize) -> Self {
        self.min_transcript_words = Some(words);
        self
    }

    /// Minimum chunk length before the semantic scorer is consulted
    pub fn semantic_min_words(mut self, words: usize) -> Self {
        self.semantic_min_words = Some(words);
        self
    }

    /// Similarity below which the semantic signal proposes a split
    pub fn semantic_threshold(mut self, threshold: f32) -> Self {
        self.semantic_threshold = Some(threshold);
        self
    }

    /// Recognizer-boundary window that defers the semantic signal
    pub fn semantic_lookahead(mut self, words: usize) -> Self {
        self.semantic_lookahead = Some(words);
        self
    }

    /// Speaker-boundary window that defers a recognizer boundary
    pub fn speaker_lookahead(mut self, words: usize) -> Self {
        self.speaker_lookahead = Some(words);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = Language::from_str(&code)?;
        }
        if let Some(enabled) = self.use_domain_exclusions {
            config.use_domain_exclusions = enabled;
        }
        if let Some(v) = self.min_words_before_split {
            config.thresholds.min_words_before_split = v;
        }
        if let Some(v) = self.min_transcript_words {
            config.thresholds.min_transcript_words = v;
        }
        if let Some(v) = self.semantic_min_words {
            config.thresholds.semantic_min_words = v;
        }
        if let Some(v) = self.semantic_threshold {
            config.thresholds.semantic_threshold = v;
        }
        if let Some(v) = self.semantic_lookahead {
            config.thresholds.semantic_lookahead = v;
        }
        if let Some(v) = self.speaker_lookahead {
            config.thresholds.speaker_lookahead = v;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn builder_sets_language_and_thresholds() {
        let config = Config::builder()
            .language("es")
            .min_words_before_split(8)
            .build()
            .unwrap();
        assert_eq!(config.language(), Language::Spanish);
        assert_eq!(config.thresholds.min_words_before_split, 8);
    }

    #[test]
    fn builder_rejects_bad_values() {
        assert!(Config::builder().language("xx").build().is_err());
        assert!(Config::builder().semantic_threshold(2.0).build().is_err());
        assert!(Config::builder().min_words_before_split(0).build().is_err());
    }
}
