//! Multi-source sentence boundary resolution for ASR transcripts.
//!
//! This crate decides, for every word position of a raw transcript, whether a
//! sentence ends there, reconciling three independent signals: acoustic
//! segment boundaries from the recognizer, speaker turns from diarization,
//! and language-specific grammatical heuristics. A deterministic
//! post-processing pass then repairs boundary artifacts (split domains, split
//! decimals, appositives, emphatic repetition) without ever fusing two
//! different speakers' text.
//!
//! # Architecture
//!
//! - **Domain layer**: pure algorithms — masking, boundary conversion, the
//!   decision walk, punctuation provenance, merge passes
//! - **Language layer**: per-language profiles over typed word tables
//! - **Application layer**: the one-directional pipeline
//! - **API layer**: validated configuration and the [`SentenceResolver`]
//!
//! # Example
//!
//! ```rust
//! use claro_core::{SentenceResolver, TranscriptInput, TimedSegment};
//!
//! let resolver = SentenceResolver::with_language("es").unwrap();
//! let input = TranscriptInput::from_segments(vec![
//!     TimedSegment::new(0.0, 2.0, "hola a todos"),
//!     TimedSegment::new(2.0, 4.0, "bienvenidos al programa"),
//! ]);
//! let output = resolver.resolve(input).unwrap();
//! assert_eq!(output.sentences.len(), 1);
//! assert_eq!(output.sentences[0].text, "Hola a todos bienvenidos al programa.");
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod language;

pub use api::{
    Config, ConfigBuilder, Error, Output, ProcessingStats, Result, SentenceResolver,
    TranscriptInput,
};
pub use domain::{
    AuditTrail, BoundaryCandidate, BoundarySource, MergeKind, MergeRecord, ScorerError,
    SemanticScorer, Sentence, SpeakerId, SpeakerSpan, TimedSegment, TimedSpeakerSegment,
    Utterance,
};
pub use language::{Language, LanguageProfile, Thresholds};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_round_trip() {
        let resolver = SentenceResolver::new();
        let output = resolver
            .resolve(TranscriptInput::from_text("hello everyone at the show"))
            .unwrap();
        assert_eq!(output.stats.sentence_count, 1);
        assert_eq!(output.sentences[0].text, "Hello everyone at the show.");
        assert!(output.sentences[0].primary_speaker().is_none());
    }
}
