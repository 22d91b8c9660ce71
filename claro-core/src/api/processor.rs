//! Main transcript resolver implementation

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Output, TranscriptInput};
use crate::application::Pipeline;
use crate::domain::masking::DomainMasker;
use crate::domain::merge::MergeEngine;
use crate::domain::semantic::SemanticScorer;
use crate::language::LanguageProfile;

/// Resolves transcripts into speaker-attributed sentences.
///
/// A resolver is immutable after construction: every [`resolve`] call builds
/// its own working state, so one resolver may serve many transcripts and may
/// be shared across threads.
///
/// [`resolve`]: SentenceResolver::resolve
pub struct SentenceResolver {
    config: Config,
    profile: LanguageProfile,
    masker: DomainMasker,
    merges: MergeEngine,
    scorer: Option<Arc<dyn SemanticScorer>>,
}

impl SentenceResolver {
    /// Create a resolver with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("default config should always be valid")
    }

    /// Create a resolver with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let profile =
            LanguageProfile::with_thresholds(config.language, config.thresholds.clone());
        let masker = DomainMasker::new(&profile, config.use_domain_exclusions);
        let merges = MergeEngine::new(config.language, config.use_domain_exclusions);
        Ok(Self {
            config,
            profile,
            masker,
            merges,
            scorer: None,
        })
    }

    /// Create a resolver for a specific language
    pub fn with_language(code: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(Config::builder().language(code).build()?)
    }

    /// Attach a semantic scorer for the embedding tie-break
    pub fn with_scorer(mut self, scorer: Arc<dyn SemanticScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a transcript into attributed sentences.
    ///
    /// This never fails on collaborator data: malformed segments or speaker
    /// spans degrade to the corresponding signal being absent.
    pub fn resolve(&self, input: TranscriptInput) -> Result<Output, Error> {
        let start = Instant::now();
        let pipeline = Pipeline {
            profile: &self.profile,
            masker: &self.masker,
            merges: &self.merges,
            scorer: self.scorer.as_deref(),
        };
        let resolution = pipeline.resolve(
            input.text.as_deref(),
            &input.segments,
            &input.speakers,
        );
        Ok(Output::from_resolution(resolution, start.elapsed()))
    }
}

impl Default for SentenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_is_reusable_across_calls() {
        let resolver = SentenceResolver::with_language("es").unwrap();
        let first = resolver
            .resolve(TranscriptInput::from_text("hola a todos"))
            .unwrap();
        let second = resolver
            .resolve(TranscriptInput::from_text("hola a todos"))
            .unwrap();
        assert_eq!(first.sentences, second.sentences);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let resolver = SentenceResolver::new();
        let output = resolver.resolve(TranscriptInput::default()).unwrap();
        assert!(output.sentences.is_empty());
        assert_eq!(output.stats.sentence_count, 0);
    }
}
