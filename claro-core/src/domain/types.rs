//! Core data model: segments, speaker spans, utterances, sentences.
//!
//! All entities are built fresh per `resolve()` call and are immutable after
//! construction; pass boundaries rebuild sentence lists instead of mutating
//! them in place.

use serde::{Deserialize, Serialize};

/// Opaque diarization label ("SPEAKER_00").
pub type SpeakerId = String;

/// A timestamped text span emitted by the upstream recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSegment {
    /// Segment start in seconds
    pub start: f64,
    /// Segment end in seconds
    pub end: f64,
    /// Recognized text, possibly carrying terminal punctuation
    pub text: String,
}

impl TimedSegment {
    /// Convenience constructor used throughout the tests.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A timestamped range attributed to one diarized speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSpeakerSegment {
    /// Span start in seconds
    pub start: f64,
    /// Span end in seconds
    pub end: f64,
    /// Diarization label
    pub speaker: SpeakerId,
}

/// A word-indexed range attributed to one speaker; `end_word` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerSpan {
    /// First word of the span
    pub start_word: usize,
    /// One past the last word of the span
    pub end_word: usize,
    /// Diarization label; `None` when the diarizer abstained
    pub speaker: Option<SpeakerId>,
}

impl SpeakerSpan {
    /// Span length in words.
    pub fn len(&self) -> usize {
        self.end_word.saturating_sub(self.start_word)
    }

    /// Whether the span covers no words.
    pub fn is_empty(&self) -> bool {
        self.end_word <= self.start_word
    }
}

/// Diarization hints in whichever form the upstream collaborator produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpeakerHints {
    /// No diarization was supplied
    #[default]
    None,
    /// Timestamped speaker segments, converted via the transcript time axis
    Timed(Vec<TimedSpeakerSegment>),
    /// Pre-converted word-indexed spans
    Spans(Vec<SpeakerSpan>),
}

/// Which signal source proposed a sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoundarySource {
    /// Speaker change from diarization
    Speaker,
    /// Acoustic segment end from the recognizer
    Recognizer,
    /// Embedding-similarity drop
    Semantic,
}

/// A word index proposed as a sentence break by one signal source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCandidate {
    /// Word position the break would follow
    pub word_index: usize,
    /// The proposing signal
    pub source: BoundarySource,
}

/// One speaker's contiguous contribution inside a sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    /// Utterance text
    pub text: String,
    /// Speaker label, if known
    pub speaker: Option<SpeakerId>,
    /// First word (transcript index)
    pub start_word: usize,
    /// One past the last word
    pub end_word: usize,
}

/// A resolved sentence with speaker attribution.
///
/// Invariant: utterances are contiguous, non-overlapping, and ordered by
/// `start_word`; there is always at least one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sentence {
    /// Full sentence text
    pub text: String,
    /// Per-speaker runs, in transcript order
    pub utterances: Vec<Utterance>,
    /// Approximate audio range in seconds, when timed segments were supplied
    pub time_range: Option<(f64, f64)>,
}

impl Sentence {
    /// The first utterance's speaker.
    pub fn primary_speaker(&self) -> Option<&str> {
        self.utterances.first().and_then(|u| u.speaker.as_deref())
    }

    /// The last utterance's speaker.
    pub fn final_speaker(&self) -> Option<&str> {
        self.utterances.last().and_then(|u| u.speaker.as_deref())
    }

    /// True iff more than one distinct known speaker label appears.
    pub fn has_speaker_changes(&self) -> bool {
        let mut seen: Option<&str> = None;
        for utterance in &self.utterances {
            if let Some(speaker) = utterance.speaker.as_deref() {
                match seen {
                    Some(first) if first != speaker => return true,
                    None => seen = Some(speaker),
                    _ => {}
                }
            }
        }
        false
    }

    /// First word index covered by this sentence.
    pub fn start_word(&self) -> usize {
        self.utterances.first().map_or(0, |u| u.start_word)
    }

    /// One past the last word index covered by this sentence.
    pub fn end_word(&self) -> usize {
        self.utterances.last().map_or(0, |u| u.end_word)
    }
}

/// Audit of punctuation provenance and merge decisions for one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditTrail {
    /// Word indices whose recognizer terminal punctuation was removed
    pub removed_periods: Vec<usize>,
    /// Word indices where the engine synthesized terminal punctuation
    pub added_periods: Vec<usize>,
    /// One record per post-processing decision, including skipped merges
    pub merges: Vec<crate::domain::merge::MergeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(speaker: Option<&str>, start: usize, end: usize) -> Utterance {
        Utterance {
            text: String::new(),
            speaker: speaker.map(str::to_string),
            start_word: start,
            end_word: end,
        }
    }

    #[test]
    fn speaker_change_detection() {
        let single = Sentence {
            text: "hola".into(),
            utterances: vec![utterance(Some("SPEAKER_00"), 0, 1)],
            time_range: None,
        };
        assert!(!single.has_speaker_changes());
        assert_eq!(single.primary_speaker(), Some("SPEAKER_00"));

        let mixed = Sentence {
            text: "hola adiós".into(),
            utterances: vec![
                utterance(Some("SPEAKER_00"), 0, 1),
                utterance(Some("SPEAKER_01"), 1, 2),
            ],
            time_range: None,
        };
        assert!(mixed.has_speaker_changes());

        let unknown = Sentence {
            text: "hola adiós".into(),
            utterances: vec![utterance(None, 0, 1), utterance(Some("SPEAKER_00"), 1, 2)],
            time_range: None,
        };
        assert!(!unknown.has_speaker_changes());
    }

    #[test]
    fn word_ranges_come_from_utterances() {
        let sentence = Sentence {
            text: String::new(),
            utterances: vec![utterance(None, 3, 5), utterance(Some("A"), 5, 9)],
            time_range: None,
        };
        assert_eq!(sentence.start_word(), 3);
        assert_eq!(sentence.end_word(), 9);
    }

    #[test]
    fn span_length() {
        let span = SpeakerSpan {
            start_word: 2,
            end_word: 6,
            speaker: None,
        };
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }
}
