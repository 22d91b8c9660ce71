//! Pipeline orchestration: one pass from raw transcript to attributed
//! sentences.
//!
//! Data flows one direction: mask → tokenize → boundary conversion →
//! decision walk → provenance repair → finalization → repair passes. Every
//! invocation builds its own boundary sets, token buffer, and audit log, so
//! independent transcripts can be resolved on independent threads without
//! sharing anything.

use tracing::debug;

use crate::domain::boundary::{SpeakerLayout, SpeakerMap, TranscriptIndex};
use crate::domain::decision::{self, WalkInput};
use crate::domain::masking::{unmask, DomainMasker};
use crate::domain::merge::{MergeEngine, MergeRecord};
use crate::domain::provenance::ProvenanceResolver;
use crate::domain::semantic::SemanticScorer;
use crate::domain::tokens;
use crate::domain::types::{AuditTrail, Sentence, SpeakerHints, TimedSegment, Utterance};
use crate::language::LanguageProfile;

/// The result of resolving one transcript.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Final sentence list, in transcript order
    pub sentences: Vec<Sentence>,
    /// Provenance and merge audit for this call
    pub audit: AuditTrail,
    /// Words in the tokenized transcript
    pub word_count: usize,
    /// Distinct speaker labels seen
    pub speaker_count: usize,
}

/// Borrowed view of everything one resolution needs.
pub struct Pipeline<'a> {
    /// Language tables and thresholds
    pub profile: &'a LanguageProfile,
    /// Compiled domain masking rules
    pub masker: &'a DomainMasker,
    /// Compiled merge passes
    pub merges: &'a MergeEngine,
    /// Optional embedding backend
    pub scorer: Option<&'a dyn SemanticScorer>,
}

impl Pipeline<'_> {
    /// Resolve a transcript into attributed sentences.
    ///
    /// `text` is used when `segments` is empty; otherwise the transcript is
    /// the segment texts joined with single spaces.
    pub fn resolve(
        &self,
        text: Option<&str>,
        segments: &[TimedSegment],
        speakers: &SpeakerHints,
    ) -> Resolution {
        let joined;
        let full_text = if segments.is_empty() {
            text.unwrap_or_default()
        } else {
            joined = segments
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            &joined
        };

        let masked = self.masker.mask(full_text, self.profile);
        let mut index = if segments.is_empty() {
            TranscriptIndex::from_text(&masked)
        } else {
            TranscriptIndex::from_segments(segments, &masked)
        };
        if index.is_empty() {
            return Resolution::default();
        }

        let layout = match speakers {
            SpeakerHints::None => SpeakerLayout::default(),
            SpeakerHints::Timed(timed) => SpeakerLayout::from_timed(timed, &index),
            SpeakerHints::Spans(spans) => SpeakerLayout::from_spans(spans.clone()),
        };
        let speaker_bounds = layout.boundaries();
        let speaker_map = layout.speaker_map(index.len());

        let mut words = std::mem::take(&mut index.words);
        let input = WalkInput {
            profile: self.profile,
            speaker_bounds: &speaker_bounds,
            recognizer_bounds: &index.recognizer_bounds,
            speakers: &speaker_map,
            scorer: self.scorer,
        };
        let (ranges, mut ctx) = decision::walk(&mut words, &input);
        debug!(
            words = words.len(),
            sentences = ranges.len(),
            speaker_bounds = speaker_bounds.len(),
            recognizer_bounds = index.recognizer_bounds.len(),
            "decision walk complete"
        );

        let mut records: Vec<MergeRecord> = Vec::new();
        let resolver =
            ProvenanceResolver::new(self.profile, &index.recognizer_terminated, &speaker_map);
        let ranges = resolver.resolve(&mut words, ranges, &mut ctx, &mut records);

        for &(start, end) in &ranges {
            if !tokens::ends_with_terminal(&words[end]) {
                words[end].push('.');
                ctx.added_periods.push(end);
            }
            words[start] = tokens::capitalize_first(&words[start]);
        }

        let sentences = ranges
            .iter()
            .map(|&(start, end)| self.build_sentence(&words, &index, &speaker_map, start, end))
            .collect();
        let sentences = self.merges.run(self.profile, sentences, &mut records);

        Resolution {
            sentences,
            audit: AuditTrail {
                removed_periods: ctx.removed_periods,
                added_periods: ctx.added_periods,
                merges: records,
            },
            word_count: words.len(),
            speaker_count: speaker_map.label_count(),
        }
    }

    /// Slice one sentence range into per-speaker utterance runs.
    fn build_sentence(
        &self,
        words: &[String],
        index: &TranscriptIndex,
        speakers: &SpeakerMap,
        start: usize,
        end: usize,
    ) -> Sentence {
        let mut utterances: Vec<Utterance> = Vec::new();
        let mut run_start = start;
        for word in start..=end {
            let changed = word > run_start
                && speakers.speaker_at(word) != speakers.speaker_at(run_start);
            if changed {
                utterances.push(self.utterance_of(words, speakers, run_start, word));
                run_start = word;
            }
        }
        utterances.push(self.utterance_of(words, speakers, run_start, end + 1));

        Sentence {
            text: unmask(&words[start..=end].join(" ")),
            utterances,
            time_range: index.time_range(start, end),
        }
    }

    fn utterance_of(
        &self,
        words: &[String],
        speakers: &SpeakerMap,
        start: usize,
        end: usize,
    ) -> Utterance {
        Utterance {
            text: unmask(&words[start..end].join(" ")),
            speaker: speakers.speaker_at(start).map(str::to_string),
            start_word: start,
            end_word: end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TimedSpeakerSegment;
    use crate::language::{Language, LanguageProfile};

    fn resolve(
        segments: &[TimedSegment],
        speakers: &SpeakerHints,
        language: Language,
    ) -> Resolution {
        let profile = LanguageProfile::new(language);
        let masker = DomainMasker::new(&profile, true);
        let merges = MergeEngine::new(language, true);
        let pipeline = Pipeline {
            profile: &profile,
            masker: &masker,
            merges: &merges,
            scorer: None,
        };
        pipeline.resolve(None, segments, speakers)
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        let resolution = resolve(&[], &SpeakerHints::None, Language::Spanish);
        assert!(resolution.sentences.is_empty());
        assert_eq!(resolution.word_count, 0);
    }

    #[test]
    fn single_speaker_connector_survives_as_one_sentence() {
        let segments = vec![
            TimedSegment::new(
                0.0,
                4.0,
                "pues ayer estuvimos hablando mucho sobre todo este nuevo trabajo.",
            ),
            TimedSegment::new(4.0, 8.0, "Y este meta es importante para nosotros dos hoy también"),
        ];
        let resolution = resolve(&segments, &SpeakerHints::None, Language::Spanish);
        assert_eq!(resolution.sentences.len(), 1);
        let text = &resolution.sentences[0].text;
        assert!(text.contains("trabajo y este meta"), "got: {text}");
        assert!(!text.contains("trabajo."), "period must be stripped");
        assert_eq!(resolution.audit.removed_periods.len(), 1);
    }

    #[test]
    fn speaker_turns_split_and_attribute() {
        let segments = vec![TimedSegment::new(
            0.0,
            10.0,
            "bueno yo creo que esto ya está listo señores gracias y ahora pasamos a la siguiente parte",
        )];
        let speakers = SpeakerHints::Timed(vec![
            TimedSpeakerSegment {
                start: 0.0,
                end: 5.5,
                speaker: "SPEAKER_00".into(),
            },
            TimedSpeakerSegment {
                start: 5.5,
                end: 10.0,
                speaker: "SPEAKER_01".into(),
            },
        ]);
        let resolution = resolve(&segments, &speakers, Language::Spanish);
        assert_eq!(resolution.sentences.len(), 2);
        assert_eq!(resolution.sentences[0].primary_speaker(), Some("SPEAKER_00"));
        assert_eq!(resolution.sentences[1].primary_speaker(), Some("SPEAKER_01"));
        assert_eq!(resolution.speaker_count, 2);
    }

    #[test]
    fn sentences_get_terminal_punctuation_and_capitals() {
        let segments = vec![TimedSegment::new(0.0, 2.0, "hola a todos los presentes")];
        let resolution = resolve(&segments, &SpeakerHints::None, Language::Spanish);
        assert_eq!(resolution.sentences[0].text, "Hola a todos los presentes.");
        assert_eq!(resolution.audit.added_periods, vec![4]);
    }

    #[test]
    fn masked_domains_survive_the_walk() {
        let segments = vec![TimedSegment::new(
            0.0,
            6.0,
            "visita nuestra página example.com para más información sobre el programa de hoy",
        )];
        let resolution = resolve(&segments, &SpeakerHints::None, Language::Spanish);
        assert_eq!(resolution.sentences.len(), 1);
        assert!(resolution.sentences[0].text.contains("example.com"));
    }

    #[test]
    fn time_ranges_come_from_the_axis() {
        let segments = vec![TimedSegment::new(0.0, 3.0, "hola a todos los presentes")];
        let resolution = resolve(&segments, &SpeakerHints::None, Language::Spanish);
        let (start, end) = resolution.sentences[0].time_range.unwrap();
        assert_eq!(start, 0.0);
        assert_eq!(end, 3.0);
    }
}
