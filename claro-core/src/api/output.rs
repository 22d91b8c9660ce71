//! Output types for transcript resolution

use std::time::Duration;

use serde::Serialize;

use crate::application::Resolution;
use crate::domain::types::{AuditTrail, Sentence};

/// Resolution output with audit metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Resolved sentences in transcript order
    pub sentences: Vec<Sentence>,
    /// Punctuation provenance and merge audit
    pub audit: AuditTrail,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingStats {
    /// Words in the tokenized transcript
    pub word_count: usize,
    /// Number of sentences produced
    pub sentence_count: usize,
    /// Distinct speaker labels seen
    pub speaker_count: usize,
    /// Post-processing merges applied
    pub merges_applied: usize,
    /// Post-processing merges skipped (and logged)
    pub merges_skipped: usize,
    /// Total resolution duration
    #[serde(skip)]
    pub duration: Duration,
}

impl Output {
    pub(crate) fn from_resolution(resolution: Resolution, duration: Duration) -> Self {
        let merges_applied = resolution
            .audit
            .merges
            .iter()
            .filter(|r| r.after.is_some())
            .count();
        let merges_skipped = resolution.audit.merges.len() - merges_applied;
        Self {
            stats: ProcessingStats {
                word_count: resolution.word_count,
                sentence_count: resolution.sentences.len(),
                speaker_count: resolution.speaker_count,
                merges_applied,
                merges_skipped,
                duration,
            },
            sentences: resolution.sentences,
            audit: resolution.audit,
        }
    }

    /// Sentence texts only, for callers that need no attribution.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
