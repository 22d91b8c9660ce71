//! Per-language rule profile, built once at engine construction.
//!
//! The profile folds the static tables into hash sets and carries the
//! validated thresholds, so the decision walk only ever does O(1) lookups.

use std::collections::HashSet;

use crate::domain::tokens::strip_word;
use crate::language::{tables, Language};

/// Validated boundary-decision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Minimum words in the current chunk before a recognizer boundary may end it.
    pub min_words_before_split: usize,
    /// Transcripts shorter than this never split on heuristics (speaker turns still split).
    pub min_transcript_words: usize,
    /// Minimum chunk length before the semantic scorer is consulted.
    pub semantic_min_words: usize,
    /// Cosine similarity below which the semantic signal proposes a split.
    pub semantic_threshold: f32,
    /// Recognizer boundary within this many words ahead defers the semantic signal.
    pub semantic_lookahead: usize,
    /// Speaker boundary within this many words ahead defers a recognizer boundary.
    pub speaker_lookahead: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words_before_split: 10,
            min_transcript_words: 20,
            semantic_min_words: 30,
            semantic_threshold: 0.75,
            semantic_lookahead: 8,
            speaker_lookahead: 3,
        }
    }
}

impl Thresholds {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.min_words_before_split == 0 {
            return Err("min_words_before_split must be greater than 0".into());
        }
        if !(0.0..=1.0).contains(&self.semantic_threshold) {
            return Err("semantic_threshold must be within 0.0..=1.0".into());
        }
        if self.semantic_min_words < self.min_words_before_split {
            return Err("semantic_min_words must not be below min_words_before_split".into());
        }
        Ok(())
    }
}

/// Immutable word tables and thresholds for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    connectors: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    participle_suffixes: &'static [&'static str],
    irregular_participles: HashSet<&'static str>,
    unit_words: HashSet<&'static str>,
    emphatics: HashSet<&'static str>,
    domain_label_exclusions: HashSet<&'static str>,
    geo_appositions: &'static [&'static str],
    thresholds: Thresholds,
}

impl LanguageProfile {
    /// Build the profile for a language with default thresholds.
    pub fn new(language: Language) -> Self {
        Self::with_thresholds(language, Thresholds::default())
    }

    /// Build the profile with caller-supplied thresholds.
    pub fn with_thresholds(language: Language, thresholds: Thresholds) -> Self {
        use Language::*;
        let (connectors, prepositions, auxiliaries) = match language {
            English => (
                tables::connectors::ENGLISH,
                tables::prepositions::ENGLISH,
                tables::auxiliaries::ENGLISH,
            ),
            Spanish => (
                tables::connectors::SPANISH,
                tables::prepositions::SPANISH,
                tables::auxiliaries::SPANISH,
            ),
            French => (
                tables::connectors::FRENCH,
                tables::prepositions::FRENCH,
                tables::auxiliaries::FRENCH,
            ),
            German => (
                tables::connectors::GERMAN,
                tables::prepositions::GERMAN,
                tables::auxiliaries::GERMAN,
            ),
        };
        let (suffixes, irregulars) = match language {
            English => (
                tables::auxiliaries::ENGLISH_PARTICIPLE_SUFFIXES,
                tables::auxiliaries::ENGLISH_IRREGULAR_PARTICIPLES,
            ),
            Spanish => (
                tables::auxiliaries::SPANISH_PARTICIPLE_SUFFIXES,
                tables::auxiliaries::SPANISH_IRREGULAR_PARTICIPLES,
            ),
            French => (
                tables::auxiliaries::FRENCH_PARTICIPLE_SUFFIXES,
                tables::auxiliaries::FRENCH_IRREGULAR_PARTICIPLES,
            ),
            German => (
                tables::auxiliaries::GERMAN_PARTICIPLE_SUFFIXES,
                tables::auxiliaries::GERMAN_IRREGULAR_PARTICIPLES,
            ),
        };
        let units = match language {
            English => tables::units::ENGLISH,
            Spanish => tables::units::SPANISH,
            French => tables::units::FRENCH,
            German => tables::units::GERMAN,
        };
        let emphatics = match language {
            English => tables::emphatics::ENGLISH,
            Spanish => tables::emphatics::SPANISH,
            French => tables::emphatics::FRENCH,
            German => tables::emphatics::GERMAN,
        };
        let exclusions = match language {
            English => tables::domains::ENGLISH_LABEL_EXCLUSIONS,
            Spanish => tables::domains::SPANISH_LABEL_EXCLUSIONS,
            French => tables::domains::FRENCH_LABEL_EXCLUSIONS,
            German => tables::domains::GERMAN_LABEL_EXCLUSIONS,
        };
        let appositions = match language {
            English => tables::appositions::ENGLISH,
            Spanish => tables::appositions::SPANISH,
            French => tables::appositions::FRENCH,
            German => tables::appositions::GERMAN,
        };

        Self {
            language,
            connectors: connectors.iter().copied().collect(),
            prepositions: prepositions.iter().copied().collect(),
            auxiliaries: auxiliaries.iter().copied().collect(),
            participle_suffixes: suffixes,
            irregular_participles: irregulars.iter().copied().collect(),
            unit_words: units.iter().copied().collect(),
            emphatics: emphatics.iter().copied().collect(),
            domain_label_exclusions: exclusions.iter().copied().collect(),
            geo_appositions: appositions,
            thresholds,
        }
    }

    /// The language this profile was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The validated thresholds.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Whether the raw token is a continuation connector ("y", "and", "und").
    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.contains(strip_word(token).as_str())
    }

    /// Whether a sentence may never end on this token.
    ///
    /// True for conjunctions, prepositions, and auxiliary/continuative verbs.
    pub fn forbids_ending(&self, token: &str) -> bool {
        let word = strip_word(token);
        self.connectors.contains(word.as_str())
            || self.prepositions.contains(word.as_str())
            || self.auxiliaries.contains(word.as_str())
    }

    /// Whether the token is an auxiliary/continuative verb form.
    pub fn is_auxiliary(&self, token: &str) -> bool {
        self.auxiliaries.contains(strip_word(token).as_str())
    }

    /// Whether the token has past-participle shape in this language.
    pub fn looks_like_participle(&self, token: &str) -> bool {
        let word = strip_word(token);
        if word.is_empty() {
            return false;
        }
        if self.irregular_participles.contains(word.as_str()) {
            return true;
        }
        if self.language == Language::German {
            // ge- prefix with a -t/-en tail: gesagt, gegangen
            return word.starts_with("ge")
                && word.chars().count() > 4
                && (word.ends_with('t') || word.ends_with("en"));
        }
        self.participle_suffixes.iter().any(|s| {
            // At least a two-byte stem before the suffix, so "red" and "vida"
            // don't pass as participles.
            word.len() >= s.len() + 2 && word.ends_with(s)
        })
    }

    /// Whether the token is a time/measurement unit word.
    pub fn is_unit_word(&self, token: &str) -> bool {
        self.unit_words.contains(strip_word(token).as_str())
    }

    /// Whether the token (stripped) is one of the language's emphatic particles.
    pub fn is_emphatic(&self, token: &str) -> bool {
        self.emphatics.contains(strip_word(token).as_str())
    }

    /// Whether a domain label should not be treated as a domain in this language.
    pub fn is_excluded_label(&self, label: &str) -> bool {
        self.domain_label_exclusions
            .contains(label.to_lowercase().as_str())
    }

    /// Geographic apposition heads for the appositive merge pass.
    pub fn geo_appositions(&self) -> &'static [&'static str] {
        self.geo_appositions
    }

    /// Whether this language uses inverted opening punctuation.
    pub fn uses_inverted_punctuation(&self) -> bool {
        self.language == Language::Spanish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_guard_words() {
        let profile = LanguageProfile::new(Language::Spanish);
        assert!(profile.is_connector("Y"));
        assert!(profile.is_connector("pero,"));
        assert!(profile.forbids_ending("de"));
        assert!(profile.forbids_ending("está."));
        assert!(!profile.forbids_ending("trabajo"));
    }

    #[test]
    fn participle_shapes() {
        let es = LanguageProfile::new(Language::Spanish);
        assert!(es.looks_like_participle("terminado"));
        assert!(es.looks_like_participle("hecho"));
        assert!(!es.looks_like_participle("ido")); // suffix alone is not enough

        let de = LanguageProfile::new(Language::German);
        assert!(de.looks_like_participle("gesagt"));
        assert!(de.looks_like_participle("gegangen"));
        assert!(de.looks_like_participle("verstanden"));
        assert!(!de.looks_like_participle("gut"));

        let en = LanguageProfile::new(Language::English);
        assert!(en.looks_like_participle("finished"));
        assert!(en.looks_like_participle("written"));
        assert!(!en.looks_like_participle("red"));
    }

    #[test]
    fn unit_and_emphatic_lookups() {
        let es = LanguageProfile::new(Language::Spanish);
        assert!(es.is_unit_word("años,"));
        assert!(es.is_emphatic("Sí."));
        assert!(!es.is_emphatic("si")); // conditional "si" is not emphatic

        let de = LanguageProfile::new(Language::German);
        assert!(de.is_emphatic("Ja!"));
    }

    #[test]
    fn threshold_validation() {
        let mut t = Thresholds::default();
        assert!(t.validate().is_ok());
        t.semantic_threshold = 1.5;
        assert!(t.validate().is_err());
        t.semantic_threshold = 0.75;
        t.min_words_before_split = 0;
        assert!(t.validate().is_err());
    }
}
