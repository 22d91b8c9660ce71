//! Domain masking: protects `label.tld` substrings from punctuation rules.
//!
//! The dot of a recognized domain is swapped for a private-use sentinel
//! character before tokenization and restored when sentence text is built.
//! The sentinel is a single char, so character-offset accounting across the
//! transcript is unaffected.

use regex::Regex;

use crate::language::tables::domains;
use crate::language::{Language, LanguageProfile};

/// Private-use sentinel standing in for a protected domain dot.
pub const DOT_SENTINEL: char = '\u{E000}';

/// Compiled masking rules for one language.
#[derive(Debug)]
pub struct DomainMasker {
    compound: Regex,
    single: Regex,
    well_known_de: Option<Regex>,
    use_exclusions: bool,
    language: Language,
}

impl DomainMasker {
    /// Build the masker for a profile. `use_exclusions` additionally skips
    /// labels that are common words in the target language.
    pub fn new(profile: &LanguageProfile, use_exclusions: bool) -> Self {
        let language = profile.language();

        let compound_alt = domains::COMPOUND_TLDS
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let compound = Regex::new(&format!(
            r"(?i)\b([a-z0-9][a-z0-9-]*)\.({compound_alt})\b"
        ))
        .expect("compound TLD pattern is statically valid");

        // Spanish drops `.de` from the candidate set: "de" is a preposition
        // there far more often than a German domain.
        let single_alt = domains::SINGLE_TLDS
            .iter()
            .filter(|t| !(language == Language::Spanish && **t == "de"))
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        let single = Regex::new(&format!(r"(?i)\b([a-z0-9][a-z0-9-]*)\.({single_alt})\b"))
            .expect("single TLD pattern is statically valid");

        let well_known_de = (language == Language::Spanish).then(|| {
            let labels = domains::WELL_KNOWN_DE_DOMAINS
                .iter()
                .filter_map(|d| d.strip_suffix(".de"))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)\b({labels})\.de\b"))
                .expect("well-known .de pattern is statically valid")
        });

        Self {
            compound,
            single,
            well_known_de,
            use_exclusions,
            language,
        }
    }

    /// Replace the dots of recognized domains with [`DOT_SENTINEL`].
    ///
    /// Compound TLDs are matched before single TLDs to avoid partial
    /// captures (`bbc.co.uk` must never half-match as `bbc.co`).
    pub fn mask(&self, text: &str, profile: &LanguageProfile) -> String {
        debug_assert_eq!(profile.language(), self.language);

        let mut out = match &self.well_known_de {
            Some(re) => re
                .replace_all(text, |caps: &regex::Captures| {
                    format!("{}{}de", &caps[1], DOT_SENTINEL)
                })
                .into_owned(),
            None => text.to_string(),
        };

        out = self
            .compound
            .replace_all(&out, |caps: &regex::Captures| {
                self.rewrite(&caps[0], &caps[1], &caps[2], profile)
            })
            .into_owned();

        self.single
            .replace_all(&out, |caps: &regex::Captures| {
                self.rewrite(&caps[0], &caps[1], &caps[2], profile)
            })
            .into_owned()
    }

    fn rewrite(&self, whole: &str, label: &str, tld: &str, profile: &LanguageProfile) -> String {
        if self.use_exclusions && profile.is_excluded_label(label) {
            return whole.to_string();
        }
        let masked_tld: String = tld
            .chars()
            .map(|c| if c == '.' { DOT_SENTINEL } else { c })
            .collect();
        format!("{label}{DOT_SENTINEL}{masked_tld}")
    }
}

/// Exact inverse of [`DomainMasker::mask`] for all non-excluded matches.
pub fn unmask(text: &str) -> String {
    text.chars()
        .map(|c| if c == DOT_SENTINEL { '.' } else { c })
        .collect()
}
