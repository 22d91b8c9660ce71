//! The boundary decision engine: one walk over the word sequence, applying a
//! fixed priority hierarchy at every position.
//!
//! Priority order at word `i`:
//! 1. grammatical guard (absolute veto)
//! 2. speaker boundary (always ends)
//! 3. recognizer boundary (ends, with connector and lookahead exceptions)
//! 4. minimum-transcript-length fallback
//! 5. semantic coherence (optional, lowest priority)
//!
//! All mutable accumulator state lives in an explicit [`DecisionContext`]
//! returned alongside the sentence ranges; the walker holds nothing across
//! calls.

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::boundary::SpeakerMap;
use crate::domain::semantic::{self, SemanticScorer};
use crate::domain::tokens;
use crate::language::LanguageProfile;

/// Words of context handed to the semantic scorer on each side.
const SEMANTIC_LEFT_WINDOW: usize = 20;
const SEMANTIC_RIGHT_WINDOW: usize = 10;

/// Accumulator state threaded through the walk and returned to the caller.
#[derive(Debug, Default)]
pub struct DecisionContext {
    /// Recognizer boundaries deferred in favor of an upcoming speaker turn.
    /// Their punctuation is resolved later by the provenance pass.
    pub skipped_recognizer: BTreeSet<usize>,
    /// Word indices whose recognizer terminal punctuation was stripped.
    pub removed_periods: Vec<usize>,
    /// Word indices where terminal punctuation was synthesized.
    pub added_periods: Vec<usize>,
}

/// Everything the walk consumes besides the token buffer.
pub struct WalkInput<'a> {
    /// Language tables and thresholds
    pub profile: &'a LanguageProfile,
    /// Word indices where the speaker changes
    pub speaker_bounds: &'a BTreeSet<usize>,
    /// Word indices where a recognizer segment ends
    pub recognizer_bounds: &'a BTreeSet<usize>,
    /// Per-word speaker attribution
    pub speakers: &'a SpeakerMap,
    /// Optional embedding backend for the semantic tie-break
    pub scorer: Option<&'a dyn SemanticScorer>,
}

/// Walk the words once and partition them into sentence ranges (inclusive).
///
/// Tokens may be mutated: a connector continuing the same speaker's clause is
/// lower-cased and the recognizer punctuation before it stripped.
pub fn walk(words: &mut [String], input: &WalkInput) -> (Vec<(usize, usize)>, DecisionContext) {
    BoundaryWalker::new(words, input).run()
}

enum RecognizerAction {
    End,
    Continue,
    Skip,
}

struct BoundaryWalker<'a, 'b> {
    words: &'a mut [String],
    input: &'a WalkInput<'b>,
    ctx: DecisionContext,
    ranges: Vec<(usize, usize)>,
    start: usize,
    open_inverted: usize,
    transcript_too_short: bool,
}

impl<'a, 'b> BoundaryWalker<'a, 'b> {
    fn new(words: &'a mut [String], input: &'a WalkInput<'b>) -> Self {
        let too_short = words.len() < input.profile.thresholds().min_transcript_words;
        Self {
            words,
            input,
            ctx: DecisionContext::default(),
            ranges: Vec::new(),
            start: 0,
            open_inverted: 0,
            transcript_too_short: too_short,
        }
    }

    fn run(mut self) -> (Vec<(usize, usize)>, DecisionContext) {
        let n = self.words.len();
        for i in 0..n {
            self.track_inverted(i);
            if i + 1 == n {
                break;
            }
            // 1. Grammatical guard: absolute veto.
            if self.guard_vetoes(i) {
                continue;
            }
            // 2. Speaker boundary: ground truth, always ends.
            if self.input.speaker_bounds.contains(&i) {
                self.end_at(i);
                continue;
            }
            // 3. Recognizer boundary, gated on chunk length.
            let thresholds = self.input.profile.thresholds();
            if self.input.recognizer_bounds.contains(&i)
                && self.chunk_len(i) >= thresholds.min_words_before_split
            {
                match self.recognizer_action(i) {
                    RecognizerAction::End => self.end_at(i),
                    RecognizerAction::Continue => {}
                    RecognizerAction::Skip => {
                        trace!(word = i, "recognizer boundary skipped for upcoming speaker turn");
                        self.ctx.skipped_recognizer.insert(i);
                    }
                }
                continue;
            }
            // 4. Too little context for heuristics below this line.
            if self.transcript_too_short {
                continue;
            }
            // 5. Semantic coherence.
            self.semantic_step(i);
        }
        if self.start < n {
            self.ranges.push((self.start, n - 1));
        }
        (self.ranges, self.ctx)
    }

    fn chunk_len(&self, i: usize) -> usize {
        i - self.start + 1
    }

    fn track_inverted(&mut self, i: usize) {
        if !self.input.profile.uses_inverted_punctuation() {
            return;
        }
        for c in self.words[i].chars() {
            match c {
                '¿' | '¡' => self.open_inverted += 1,
                '?' | '!' => self.open_inverted = self.open_inverted.saturating_sub(1),
                _ => {}
            }
        }
    }

    fn guard_vetoes(&self, i: usize) -> bool {
        let profile = self.input.profile;
        let word = &self.words[i];
        if profile.forbids_ending(word) {
            return true;
        }
        if self.open_inverted > 0 {
            return true;
        }
        let next = &self.words[i + 1];
        if tokens::is_numeric(word) && profile.is_unit_word(next) {
            return true;
        }
        if profile.is_auxiliary(word) && profile.looks_like_participle(next) {
            return true;
        }
        false
    }

    fn recognizer_action(&mut self, i: usize) -> RecognizerAction {
        let profile = self.input.profile;
        let speakers = self.input.speakers;
        let next_is_connector = profile.is_connector(&self.words[i + 1]);

        // (a) Same speaker continuing across a connector: the recognizer
        // punctuation is an artifact, not a sentence end.
        if next_is_connector && speakers.speaker_at(i) == speakers.speaker_at(i + 1) {
            if tokens::ends_with_terminal(&self.words[i]) {
                self.words[i] = tokens::strip_terminal(&self.words[i]);
                self.ctx.removed_periods.push(i);
            }
            self.words[i + 1] = tokens::lowercase_first(&self.words[i + 1]);
            return RecognizerAction::Continue;
        }

        // (b) A speaker turn a few words ahead outranks this boundary.
        let lookahead = profile.thresholds().speaker_lookahead;
        let turn_ahead = lookahead > 0
            && self
                .input
                .speaker_bounds
                .range(i + 1..=i + lookahead)
                .next()
                .is_some();
        if turn_ahead && (next_is_connector || tokens::starts_lowercase(&self.words[i + 1])) {
            return RecognizerAction::Skip;
        }

        RecognizerAction::End
    }

    fn semantic_step(&mut self, i: usize) {
        let thresholds = self.input.profile.thresholds();
        let Some(scorer) = self.input.scorer else {
            return;
        };
        if self.chunk_len(i) <= thresholds.semantic_min_words {
            return;
        }
        // Lookahead deferral: a recognizer boundary close ahead is the
        // higher-priority signal; let step 3 act there instead.
        if thresholds.semantic_lookahead > 0
            && self
                .input
                .recognizer_bounds
                .range(i + 1..=i + thresholds.semantic_lookahead)
                .next()
                .is_some()
        {
            return;
        }
        let left_start = (i + 1).saturating_sub(SEMANTIC_LEFT_WINDOW).max(self.start);
        let right_end = (i + 1 + SEMANTIC_RIGHT_WINDOW).min(self.words.len());
        let left = self.words[left_start..=i].join(" ");
        let right = self.words[i + 1..right_end].join(" ");
        if let Some(sim) = semantic::similarity(scorer, &left, &right) {
            if sim < thresholds.semantic_threshold {
                trace!(word = i, similarity = sim, "semantic break");
                self.end_at(i);
            }
        }
    }

    fn end_at(&mut self, i: usize) {
        self.ranges.push((self.start, i));
        self.start = i + 1;
        self.open_inverted = 0;
    }
}
