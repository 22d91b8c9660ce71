//! Punctuation provenance: recognizer-added terminal punctuation that lands
//! mid-clause is repaired here, never silently.
//!
//! Two repairs run after the decision walk:
//! - skipped recognizer boundaries (deferred to a speaker turn) have their
//!   punctuation stripped when a same-speaker connector follows;
//! - adjacent sentences are merged when the earlier one ends with
//!   recognizer-added punctuation, the later one starts with a connector, and
//!   a single known speaker covers both sides.
//!
//! Anything not covered by those two cases keeps its punctuation. Every
//! decision, including each preserved case, lands in the audit log.

use std::collections::BTreeSet;

use smallvec::smallvec;

use crate::domain::boundary::SpeakerMap;
use crate::domain::decision::DecisionContext;
use crate::domain::merge::{MergeKind, MergeRecord};
use crate::domain::tokens;
use crate::language::LanguageProfile;

/// Resolves recognizer punctuation against the sentence partition.
pub struct ProvenanceResolver<'a> {
    profile: &'a LanguageProfile,
    recognizer_terminated: &'a BTreeSet<usize>,
    speakers: &'a SpeakerMap,
}

impl<'a> ProvenanceResolver<'a> {
    /// Build a resolver over this call's boundary metadata.
    pub fn new(
        profile: &'a LanguageProfile,
        recognizer_terminated: &'a BTreeSet<usize>,
        speakers: &'a SpeakerMap,
    ) -> Self {
        Self {
            profile,
            recognizer_terminated,
            speakers,
        }
    }

    /// Repair skipped boundaries and merge continuing sentence pairs.
    ///
    /// Returns the (possibly smaller) sentence ranges. Tokens are mutated in
    /// place; removals are appended to `ctx.removed_periods`.
    pub fn resolve(
        &self,
        words: &mut [String],
        ranges: Vec<(usize, usize)>,
        ctx: &mut DecisionContext,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<(usize, usize)> {
        self.repair_skipped(words, &ranges, ctx, records);
        self.merge_continuations(words, ranges, ctx, records)
    }

    /// §Skipped boundaries: punctuation left hanging mid-sentence.
    fn repair_skipped(
        &self,
        words: &mut [String],
        ranges: &[(usize, usize)],
        ctx: &mut DecisionContext,
        records: &mut Vec<MergeRecord>,
    ) {
        let skipped: Vec<usize> = ctx.skipped_recognizer.iter().copied().collect();
        for s in skipped {
            if s + 1 >= words.len() || !tokens::ends_with_terminal(&words[s]) {
                continue;
            }
            // A skipped boundary that became a sentence end anyway keeps its mark.
            if ranges.iter().any(|&(_, end)| end == s) {
                continue;
            }
            let sentence = ranges.iter().position(|&(start, end)| start <= s && s <= end);
            let same_speaker = self.speakers.speaker_at(s) == self.speakers.speaker_at(s + 1);
            if self.profile.is_connector(&words[s + 1]) && same_speaker {
                let before = format!("{} {}", words[s], words[s + 1]);
                words[s] = tokens::strip_terminal(&words[s]);
                words[s + 1] = tokens::lowercase_first(&words[s + 1]);
                ctx.removed_periods.push(s);
                records.push(MergeRecord {
                    kind: MergeKind::ConnectorContinuation,
                    sentence_indices: sentence.map_or(smallvec![], |i| smallvec![i]),
                    reason: "skipped_boundary_connector".into(),
                    speakers: vec![self.speakers.speaker_at(s).map(str::to_string)],
                    before: vec![before],
                    after: Some(format!("{} {}", words[s], words[s + 1])),
                });
            } else {
                // Open decision: without a connector the mark stays put.
                let reason = if same_speaker {
                    "preserved_no_connector"
                } else {
                    "preserved_speaker_mismatch"
                };
                records.push(MergeRecord {
                    kind: MergeKind::ConnectorContinuation,
                    sentence_indices: sentence.map_or(smallvec![], |i| smallvec![i]),
                    reason: reason.into(),
                    speakers: vec![self.speakers.speaker_at(s).map(str::to_string)],
                    before: vec![format!("{} {}", words[s], words[s + 1])],
                    after: None,
                });
            }
        }
    }

    /// §Adjacent pairs: recognizer punctuation + connector + one known speaker.
    fn merge_continuations(
        &self,
        words: &mut [String],
        ranges: Vec<(usize, usize)>,
        ctx: &mut DecisionContext,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<(usize, usize)> {
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
        for (input_index, range) in ranges.into_iter().enumerate() {
            let Some(previous) = merged.last_mut() else {
                merged.push(range);
                continue;
            };
            let last_word = previous.1;
            let first_word = range.0;
            let candidate = self.recognizer_terminated.contains(&last_word)
                && tokens::ends_with_terminal(&words[last_word])
                && self.profile.is_connector(&words[first_word]);
            if !candidate {
                merged.push(range);
                continue;
            }

            let speaker_before = self.speakers.speaker_at(last_word);
            let speaker_after = self.speakers.speaker_at(first_word);
            let before = vec![
                words[previous.0..=previous.1].join(" "),
                words[range.0..=range.1].join(" "),
            ];
            // Conservative default: never merge across unknown or differing
            // speakers.
            if speaker_before.is_some() && speaker_before == speaker_after {
                words[last_word] = tokens::strip_terminal(&words[last_word]);
                words[first_word] = tokens::lowercase_first(&words[first_word]);
                ctx.removed_periods.push(last_word);
                previous.1 = range.1;
                records.push(MergeRecord {
                    kind: MergeKind::ConnectorContinuation,
                    sentence_indices: smallvec![input_index - 1, input_index],
                    reason: "connector_same_speaker".into(),
                    speakers: vec![speaker_before.map(str::to_string)],
                    before,
                    after: Some(words[previous.0..=previous.1].join(" ")),
                });
            } else {
                records.push(MergeRecord {
                    kind: MergeKind::ConnectorContinuation,
                    sentence_indices: smallvec![input_index - 1, input_index],
                    reason: "preserved_unknown_or_different_speaker".into(),
                    speakers: vec![
                        speaker_before.map(str::to_string),
                        speaker_after.map(str::to_string),
                    ],
                    before,
                    after: None,
                });
                merged.push(range);
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boundary::SpeakerLayout;
    use crate::domain::types::SpeakerSpan;
    use crate::language::Language;

    fn words_of(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn speakers_over(assignments: &[(usize, usize, &str)], n: usize) -> SpeakerMap {
        let spans = assignments
            .iter()
            .map(|&(start, end, label)| SpeakerSpan {
                start_word: start,
                end_word: end,
                speaker: Some(label.to_string()),
            })
            .collect();
        SpeakerLayout::from_spans(spans).speaker_map(n)
    }

    #[test]
    fn skipped_boundary_with_connector_is_stripped() {
        let profile = LanguageProfile::new(Language::Spanish);
        let mut words = words_of("aceptamos la propuesta ayer. y firmamos después señores bueno");
        let terminated = BTreeSet::from([3]);
        let speakers = SpeakerMap::empty(words.len());
        let mut ctx = DecisionContext::default();
        ctx.skipped_recognizer.insert(3);
        let mut records = Vec::new();

        let resolver = ProvenanceResolver::new(&profile, &terminated, &speakers);
        let ranges = resolver.resolve(&mut words, vec![(0, 7), (8, 8)], &mut ctx, &mut records);

        assert_eq!(ranges, vec![(0, 7), (8, 8)]);
        assert_eq!(words[3], "ayer");
        assert_eq!(words[4], "y");
        assert_eq!(ctx.removed_periods, vec![3]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reason, "skipped_boundary_connector");
    }

    #[test]
    fn skipped_boundary_without_connector_is_preserved() {
        let profile = LanguageProfile::new(Language::Spanish);
        let mut words = words_of("leyó mateo siete doce. luego siguió con el sermón entero");
        let terminated = BTreeSet::from([3]);
        let speakers = SpeakerMap::empty(words.len());
        let mut ctx = DecisionContext::default();
        ctx.skipped_recognizer.insert(3);
        let mut records = Vec::new();

        let resolver = ProvenanceResolver::new(&profile, &terminated, &speakers);
        resolver.resolve(&mut words, vec![(0, 9)], &mut ctx, &mut records);

        assert_eq!(words[3], "doce.", "no connector, mark stays");
        assert!(ctx.removed_periods.is_empty());
        assert_eq!(records[0].reason, "preserved_no_connector");
        assert_eq!(records[0].after, None);
    }

    #[test]
    fn adjacent_pair_merges_for_one_known_speaker() {
        let profile = LanguageProfile::new(Language::Spanish);
        let mut words = words_of("este es mi trabajo. Y este meta es importante");
        let terminated = BTreeSet::from([3]);
        let speakers = speakers_over(&[(0, 9, "SPEAKER_00")], words.len());
        let mut ctx = DecisionContext::default();
        let mut records = Vec::new();

        let resolver = ProvenanceResolver::new(&profile, &terminated, &speakers);
        let ranges = resolver.resolve(&mut words, vec![(0, 3), (4, 8)], &mut ctx, &mut records);

        assert_eq!(ranges, vec![(0, 8)]);
        assert_eq!(words[3], "trabajo");
        assert_eq!(words[4], "y");
        assert_eq!(ctx.removed_periods, vec![3]);
        assert_eq!(records[0].reason, "connector_same_speaker");
    }

    #[test]
    fn adjacent_pair_preserved_across_unknown_speakers() {
        let profile = LanguageProfile::new(Language::Spanish);
        let mut words = words_of("este es mi trabajo. Y este meta es importante");
        let terminated = BTreeSet::from([3]);
        let speakers = SpeakerMap::empty(words.len());
        let mut ctx = DecisionContext::default();
        let mut records = Vec::new();

        let resolver = ProvenanceResolver::new(&profile, &terminated, &speakers);
        let ranges = resolver.resolve(&mut words, vec![(0, 3), (4, 8)], &mut ctx, &mut records);

        assert_eq!(ranges, vec![(0, 3), (4, 8)], "unknown speakers never merge");
        assert_eq!(words[3], "trabajo.");
        assert_eq!(records[0].reason, "preserved_unknown_or_different_speaker");
    }

    #[test]
    fn adjacent_pair_preserved_across_differing_speakers() {
        let profile = LanguageProfile::new(Language::Spanish);
        let mut words = words_of("este es mi trabajo. Y este meta es importante");
        let terminated = BTreeSet::from([3]);
        let speakers = speakers_over(&[(0, 4, "SPEAKER_00"), (4, 9, "SPEAKER_01")], words.len());
        let mut ctx = DecisionContext::default();
        let mut records = Vec::new();

        let resolver = ProvenanceResolver::new(&profile, &terminated, &speakers);
        let ranges = resolver.resolve(&mut words, vec![(0, 3), (4, 8)], &mut ctx, &mut records);

        assert_eq!(ranges, vec![(0, 3), (4, 8)]);
        assert_eq!(words[3], "trabajo.", "speaker turn keeps the period");
    }
}
