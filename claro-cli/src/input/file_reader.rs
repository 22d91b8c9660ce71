//! Transcript document parsing
//!
//! The CLI consumes one JSON document per recording, carrying whatever the
//! upstream recognizer and diarizer produced: recognizer segments, optional
//! speaker hints (timed or word-indexed), or a bare text transcript.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use claro_core::{SpeakerSpan, TimedSegment, TimedSpeakerSegment, TranscriptInput};

use crate::error::CliError;

/// One recording's worth of recognizer/diarizer output.
#[derive(Debug, Deserialize)]
pub struct TranscriptDocument {
    /// Language code; the CLI flag takes precedence when given
    #[serde(default)]
    pub language: Option<String>,
    /// Raw transcript text, used when no segments are present
    #[serde(default)]
    pub text: Option<String>,
    /// Ordered recognizer segments
    #[serde(default)]
    pub segments: Vec<TimedSegment>,
    /// Diarization output in either supported form
    #[serde(default)]
    pub speakers: Vec<SpeakerEntry>,
}

/// A diarization entry: timestamped or already word-indexed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpeakerEntry {
    /// `{start, end, speaker}` in seconds
    Timed {
        /// Span start in seconds
        start: f64,
        /// Span end in seconds
        end: f64,
        /// Diarization label
        speaker: String,
    },
    /// `{start_word, end_word, speaker}` with `end_word` exclusive
    Indexed {
        /// First word of the span
        start_word: usize,
        /// One past the last word
        end_word: usize,
        /// Diarization label, if any
        speaker: Option<String>,
    },
}

impl TranscriptDocument {
    /// Parse a document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| CliError::FileNotFound(path.display().to_string()))?;
        serde_json::from_str(&raw)
            .with_context(|| CliError::InvalidDocument(path.display().to_string()))
    }

    /// Convert into the core input type.
    ///
    /// Fails when the speaker list mixes timed and word-indexed entries;
    /// everything else is the core's business.
    pub fn into_input(self) -> Result<TranscriptInput> {
        let input = if self.segments.is_empty() {
            TranscriptInput::from_text(self.text.unwrap_or_default())
        } else {
            TranscriptInput::from_segments(self.segments)
        };

        if self.speakers.is_empty() {
            return Ok(input);
        }
        let timed = self
            .speakers
            .iter()
            .all(|s| matches!(s, SpeakerEntry::Timed { .. }));
        let indexed = self
            .speakers
            .iter()
            .all(|s| matches!(s, SpeakerEntry::Indexed { .. }));
        if timed {
            let speakers = self
                .speakers
                .into_iter()
                .map(|s| match s {
                    SpeakerEntry::Timed {
                        start,
                        end,
                        speaker,
                    } => TimedSpeakerSegment {
                        start,
                        end,
                        speaker,
                    },
                    SpeakerEntry::Indexed { .. } => unreachable!("checked all-timed above"),
                })
                .collect();
            Ok(input.with_speaker_segments(speakers))
        } else if indexed {
            let spans = self
                .speakers
                .into_iter()
                .map(|s| match s {
                    SpeakerEntry::Indexed {
                        start_word,
                        end_word,
                        speaker,
                    } => SpeakerSpan {
                        start_word,
                        end_word,
                        speaker,
                    },
                    SpeakerEntry::Timed { .. } => unreachable!("checked all-indexed above"),
                })
                .collect();
            Ok(input.with_speaker_spans(spans))
        } else {
            anyhow::bail!(CliError::InvalidDocument(
                "speakers mix timed and word-indexed entries".into()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timed_speakers() {
        let doc: TranscriptDocument = serde_json::from_str(
            r#"{
                "language": "es",
                "segments": [{"start": 0.0, "end": 2.0, "text": "hola a todos"}],
                "speakers": [{"start": 0.0, "end": 2.0, "speaker": "SPEAKER_00"}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.language.as_deref(), Some("es"));
        assert!(doc.into_input().is_ok());
    }

    #[test]
    fn parses_indexed_speakers() {
        let doc: TranscriptDocument = serde_json::from_str(
            r#"{
                "segments": [{"start": 0.0, "end": 2.0, "text": "hola a todos"}],
                "speakers": [{"start_word": 0, "end_word": 3, "speaker": "SPEAKER_00"}]
            }"#,
        )
        .unwrap();
        assert!(doc.into_input().is_ok());
    }

    #[test]
    fn rejects_mixed_speaker_forms() {
        let doc: TranscriptDocument = serde_json::from_str(
            r#"{
                "segments": [{"start": 0.0, "end": 2.0, "text": "hola a todos"}],
                "speakers": [
                    {"start": 0.0, "end": 1.0, "speaker": "A"},
                    {"start_word": 2, "end_word": 3, "speaker": "B"}
                ]
            }"#,
        )
        .unwrap();
        assert!(doc.into_input().is_err());
    }

    #[test]
    fn bare_text_documents_are_fine() {
        let doc: TranscriptDocument =
            serde_json::from_str(r#"{"text": "hola a todos los presentes"}"#).unwrap();
        assert!(doc.into_input().is_ok());
    }
}
