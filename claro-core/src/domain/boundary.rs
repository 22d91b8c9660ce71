//! Boundary conversion: maps recognizer segments and diarization spans onto
//! the shared word-index space.
//!
//! Recognizer boundaries are located by cumulative character-length
//! accounting over the joined transcript; timestamps are mapped to words by
//! linear interpolation inside the containing segment, snapping to the end of
//! the preceding segment when a timestamp falls in a silence gap.
//!
//! Failure policy: absent or malformed inputs degrade to empty boundary sets
//! with a warning, never an error.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::tokens;
use crate::domain::types::{SpeakerId, SpeakerSpan, TimedSegment, TimedSpeakerSegment};

/// Tokenized transcript plus the per-word maps boundary conversion needs.
#[derive(Debug)]
pub struct TranscriptIndex {
    /// Whitespace tokens of the (masked) transcript.
    pub words: Vec<String>,
    /// Character span `[start, end)` of each word in the joined text.
    char_spans: Vec<(usize, usize)>,
    /// Word indices where a recognizer segment ends.
    pub recognizer_bounds: BTreeSet<usize>,
    /// Recognizer end words whose segment text carried terminal punctuation.
    pub recognizer_terminated: BTreeSet<usize>,
    segment_ranges: Vec<SegmentRange>,
    word_times: Option<Vec<(f64, f64)>>,
}

#[derive(Debug)]
struct SegmentRange {
    start: f64,
    end: f64,
    first_word: usize,
    last_word: usize,
}

impl TranscriptIndex {
    /// Index a transcript that has no segment metadata.
    pub fn from_text(masked: &str) -> Self {
        let (words, char_spans) = tokenize(masked);
        Self {
            words,
            char_spans,
            recognizer_bounds: BTreeSet::new(),
            recognizer_terminated: BTreeSet::new(),
            segment_ranges: Vec::new(),
            word_times: None,
        }
    }

    /// Index the joined transcript of an ordered segment list.
    ///
    /// `masked` must be the segment texts joined with single spaces, already
    /// domain-masked (masking preserves character counts).
    pub fn from_segments(segments: &[TimedSegment], masked: &str) -> Self {
        let mut index = Self::from_text(masked);
        if segments.is_empty() {
            return index;
        }
        if !timestamps_are_valid(segments) {
            warn!("malformed recognizer segment timestamps; proceeding without segment boundaries");
            return index;
        }

        let mut acc = 0usize;
        for segment in segments {
            let len = segment.text.chars().count();
            let start_char = acc;
            let end_char = acc + len;
            acc = end_char + 1; // joining space

            if len == 0 {
                continue;
            }
            let Some(last_word) = index.word_at_char(end_char.saturating_sub(1)) else {
                continue;
            };
            let first_word = index.word_from_char(start_char).unwrap_or(last_word);

            index.recognizer_bounds.insert(last_word);
            if tokens::ends_with_terminal(segment.text.trim_end()) {
                index.recognizer_terminated.insert(last_word);
            }
            index.segment_ranges.push(SegmentRange {
                start: segment.start,
                end: segment.end,
                first_word,
                last_word,
            });
        }

        index.word_times = index.build_word_times();
        index
    }

    /// Number of words in the transcript.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the transcript has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word whose character span contains `c`, else the nearest word
    /// before it.
    fn word_at_char(&self, c: usize) -> Option<usize> {
        match self.char_spans.partition_point(|&(start, _)| start <= c) {
            0 => None,
            i => Some(i - 1),
        }
    }

    /// The word whose span contains `c`, else the nearest word after it.
    fn word_from_char(&self, c: usize) -> Option<usize> {
        let i = self.char_spans.partition_point(|&(_, end)| end <= c);
        (i < self.char_spans.len()).then_some(i)
    }

    /// Map a timestamp to a word index, snapping backwards in silence gaps.
    pub fn word_at_time(&self, t: f64) -> Option<usize> {
        let ranges = &self.segment_ranges;
        if ranges.is_empty() || !t.is_finite() {
            return None;
        }
        let i = ranges.partition_point(|r| r.start <= t);
        if i == 0 {
            return Some(ranges[0].first_word);
        }
        let range = &ranges[i - 1];
        if t >= range.end {
            // Silence gap: snap to the end of the preceding segment.
            return Some(range.last_word);
        }
        Some(range.interpolate(t))
    }

    /// Map a timestamp to a word index, snapping forwards in silence gaps.
    /// Used for span starts so a span never begins before its audio.
    pub fn word_after_time(&self, t: f64) -> Option<usize> {
        let ranges = &self.segment_ranges;
        if ranges.is_empty() || !t.is_finite() {
            return None;
        }
        let i = ranges.partition_point(|r| r.end <= t);
        if i == ranges.len() {
            return Some(ranges[ranges.len() - 1].last_word);
        }
        let range = &ranges[i];
        if t <= range.start {
            return Some(range.first_word);
        }
        Some(range.interpolate(t))
    }

    /// Approximate audio range covered by an inclusive word range.
    pub fn time_range(&self, first_word: usize, last_word: usize) -> Option<(f64, f64)> {
        let times = self.word_times.as_ref()?;
        let first = times.get(first_word)?;
        let last = times.get(last_word)?;
        Some((first.0, last.1))
    }

    fn build_word_times(&self) -> Option<Vec<(f64, f64)>> {
        if self.segment_ranges.is_empty() {
            return None;
        }
        let mut times = vec![(0.0, 0.0); self.words.len()];
        for range in &self.segment_ranges {
            let count = (range.last_word - range.first_word + 1) as f64;
            let span = range.end - range.start;
            for (j, slot) in times[range.first_word..=range.last_word].iter_mut().enumerate() {
                let j = j as f64;
                *slot = (
                    range.start + span * j / count,
                    range.start + span * (j + 1.0) / count,
                );
            }
        }
        Some(times)
    }
}

impl SegmentRange {
    fn interpolate(&self, t: f64) -> usize {
        let count = self.last_word - self.first_word + 1;
        let span = self.end - self.start;
        if span <= 0.0 {
            return self.last_word;
        }
        let offset = ((t - self.start) / span * count as f64).floor() as usize;
        (self.first_word + offset).min(self.last_word)
    }
}

fn tokenize(text: &str) -> (Vec<String>, Vec<(usize, usize)>) {
    let mut words = Vec::new();
    let mut spans = Vec::new();
    let mut start = None;
    let mut current = String::new();
    for (i, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, i));
                words.push(std::mem::take(&mut current));
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            current.push(c);
        }
    }
    if let Some(s) = start {
        spans.push((s, text.chars().count()));
        words.push(current);
    }
    (words, spans)
}

fn timestamps_are_valid(segments: &[TimedSegment]) -> bool {
    let mut previous = f64::NEG_INFINITY;
    for segment in segments {
        if !segment.start.is_finite()
            || !segment.end.is_finite()
            || segment.end < segment.start
            || segment.start < previous
        {
            return false;
        }
        previous = segment.start;
    }
    true
}

/// Word-indexed speaker spans plus the weight used for overlap resolution.
#[derive(Debug, Default)]
pub struct SpeakerLayout {
    spans: Vec<SpeakerSpan>,
    weights: Vec<f64>,
}

impl SpeakerLayout {
    /// Build from pre-converted word-indexed spans; weight is span length.
    pub fn from_spans(mut spans: Vec<SpeakerSpan>) -> Self {
        spans.retain(|s| !s.is_empty());
        spans.sort_by_key(|s| s.start_word);
        let weights = spans.iter().map(|s| s.len() as f64).collect();
        Self { spans, weights }
    }

    /// Convert timed diarization segments via the transcript's time axis.
    ///
    /// A malformed list degrades to an empty layout.
    pub fn from_timed(timed: &[TimedSpeakerSegment], index: &TranscriptIndex) -> Self {
        if timed
            .iter()
            .any(|s| !s.start.is_finite() || !s.end.is_finite() || s.end < s.start)
        {
            warn!("malformed diarization timestamps; proceeding without speaker hints");
            return Self::default();
        }
        let mut spans = Vec::with_capacity(timed.len());
        let mut weights = Vec::with_capacity(timed.len());
        for segment in timed {
            let (Some(first), Some(last)) = (
                index.word_after_time(segment.start),
                index.word_at_time(segment.end),
            ) else {
                continue;
            };
            if last < first {
                continue;
            }
            spans.push(SpeakerSpan {
                start_word: first,
                end_word: last + 1,
                speaker: Some(segment.speaker.clone()),
            });
            weights.push(segment.end - segment.start);
        }
        let mut layout = Self { spans, weights };
        layout.sort();
        layout
    }

    fn sort(&mut self) {
        let mut order: Vec<usize> = (0..self.spans.len()).collect();
        order.sort_by_key(|&i| self.spans[i].start_word);
        self.spans = order.iter().map(|&i| self.spans[i].clone()).collect();
        self.weights = order.iter().map(|&i| self.weights[i]).collect();
    }

    /// Whether any speaker hints survived conversion.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The converted spans, ordered by start word.
    pub fn spans(&self) -> &[SpeakerSpan] {
        &self.spans
    }

    /// Word indices where the speaker changes: `end_word - 1` of a span whose
    /// successor names a different speaker.
    pub fn boundaries(&self) -> BTreeSet<usize> {
        let mut bounds = BTreeSet::new();
        for pair in self.spans.windows(2) {
            if pair[0].speaker != pair[1].speaker && pair[0].end_word > 0 {
                bounds.insert(pair[0].end_word - 1);
            }
        }
        bounds
    }

    /// Resolve per-word attribution; overlaps go to the heavier span.
    pub fn speaker_map(&self, word_count: usize) -> SpeakerMap {
        let mut labels: Vec<SpeakerId> = Vec::new();
        let mut word_speaker: Vec<Option<u32>> = vec![None; word_count];
        let mut word_weight: Vec<f64> = vec![0.0; word_count];

        for (span, &weight) in self.spans.iter().zip(&self.weights) {
            let Some(speaker) = &span.speaker else {
                continue;
            };
            let label_idx = match labels.iter().position(|l| l == speaker) {
                Some(i) => i as u32,
                None => {
                    labels.push(speaker.clone());
                    (labels.len() - 1) as u32
                }
            };
            for word in span.start_word..span.end_word.min(word_count) {
                match word_speaker[word] {
                    Some(existing) if existing != label_idx => {
                        if weight > word_weight[word] {
                            debug!(
                                word,
                                winner = %speaker,
                                "ambiguous speaker overlap resolved to longer span"
                            );
                            word_speaker[word] = Some(label_idx);
                            word_weight[word] = weight;
                        }
                    }
                    _ => {
                        word_speaker[word] = Some(label_idx);
                        word_weight[word] = word_weight[word].max(weight);
                    }
                }
            }
        }

        SpeakerMap {
            labels,
            word_speaker,
        }
    }
}

/// Per-word speaker attribution after overlap resolution.
#[derive(Debug)]
pub struct SpeakerMap {
    labels: Vec<SpeakerId>,
    word_speaker: Vec<Option<u32>>,
}

impl SpeakerMap {
    /// A map with no attribution at all.
    pub fn empty(word_count: usize) -> Self {
        Self {
            labels: Vec::new(),
            word_speaker: vec![None; word_count],
        }
    }

    /// The speaker attributed to a word, if any.
    pub fn speaker_at(&self, word: usize) -> Option<&str> {
        self.word_speaker
            .get(word)
            .copied()
            .flatten()
            .map(|i| self.labels[i as usize].as_str())
    }

    /// Number of distinct speaker labels seen.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
