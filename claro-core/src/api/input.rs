//! Input abstraction for transcript resolution

use crate::domain::types::{SpeakerHints, SpeakerSpan, TimedSegment, TimedSpeakerSegment};

/// A transcript plus whatever collaborator metadata is available.
///
/// Recognizer segments carry the text when present; a raw text transcript is
/// the fallback for callers without segment metadata. Speaker hints may be
/// timestamped (converted through the segment time axis) or already
/// word-indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptInput {
    pub(crate) text: Option<String>,
    pub(crate) segments: Vec<TimedSegment>,
    pub(crate) speakers: SpeakerHints,
}

impl TranscriptInput {
    /// Input from a raw transcript with no segment metadata.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Input from ordered recognizer segments.
    pub fn from_segments(segments: Vec<TimedSegment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Attach timestamped diarization segments.
    pub fn with_speaker_segments(mut self, speakers: Vec<TimedSpeakerSegment>) -> Self {
        self.speakers = SpeakerHints::Timed(speakers);
        self
    }

    /// Attach pre-converted word-indexed speaker spans.
    pub fn with_speaker_spans(mut self, spans: Vec<SpeakerSpan>) -> Self {
        self.speakers = SpeakerHints::Spans(spans);
        self
    }

    /// Whether any transcript content is present at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.text.as_deref().map_or(true, |t| t.trim().is_empty())
    }
}
