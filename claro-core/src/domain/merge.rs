//! Post-processing merge engine: a fixed, ordered set of speaker-aware
//! repair passes over the resolved sentence list.
//!
//! Pass order is part of the contract: domain, decimal, appositive,
//! emphatic. Each pass rebuilds the list, is re-entrant, and appends a
//! [`MergeRecord`] for every decision — applied or explicitly skipped. A
//! merge never fuses two sentences whose known speakers differ.

use regex::Regex;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use crate::domain::tokens;
use crate::domain::types::{Sentence, SpeakerId, Utterance};
use crate::language::tables::domains;
use crate::language::{Language, LanguageProfile};

/// Which repair produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MergeKind {
    /// `label.` + `tld …` repaired into one domain
    Domain,
    /// `99.` + `9% …` repaired into one decimal
    Decimal,
    /// `de Texas.` + `Estados Unidos …` joined with a comma
    Appositive,
    /// runs of emphatic particles collapsed
    Emphatic,
    /// provenance repair of recognizer punctuation before a connector
    ConnectorContinuation,
}

/// Append-only audit entry; `after == None` records a skipped merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeRecord {
    /// The pass that produced this record
    pub kind: MergeKind,
    /// Positions in the pass's input sentence list
    pub sentence_indices: SmallVec<[usize; 3]>,
    /// Why the merge was applied or skipped
    pub reason: String,
    /// Speaker labels involved at the decision point
    pub speakers: Vec<Option<SpeakerId>>,
    /// Sentence texts before the decision
    pub before: Vec<String>,
    /// Merged text, when the merge was applied
    pub after: Option<String>,
}

/// Compiled merge passes for one language.
pub struct MergeEngine {
    use_exclusions: bool,
    single_tlds: Vec<&'static str>,
    domain_head: Regex,
    decimal_head: Regex,
    decimal_tail: Regex,
    appositive_head: Regex,
}

impl MergeEngine {
    /// Build the engine; regexes are compiled once per resolver.
    pub fn new(language: Language, use_exclusions: bool) -> Self {
        let single_tlds = domains::SINGLE_TLDS
            .iter()
            .filter(|t| !(language == Language::Spanish && **t == "de"))
            .copied()
            .collect();
        Self {
            use_exclusions,
            single_tlds,
            domain_head: Regex::new(r"([A-Za-z0-9][A-Za-z0-9-]*)\.$")
                .expect("domain head pattern is statically valid"),
            decimal_head: Regex::new(r"\b(\d{1,3})\.$")
                .expect("decimal head pattern is statically valid"),
            decimal_tail: Regex::new(r"^\d{1,3}%?\b")
                .expect("decimal tail pattern is statically valid"),
            appositive_head: Regex::new(r"\b(?:de|del)\s+\p{Lu}[\p{L}\p{N}-]*\.$")
                .expect("appositive head pattern is statically valid"),
        }
    }

    /// Run all passes in their fixed order.
    pub fn run(
        &self,
        profile: &LanguageProfile,
        sentences: Vec<Sentence>,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<Sentence> {
        let sentences = self.domain_pass(profile, sentences, records);
        let sentences = self.decimal_pass(sentences, records);
        let sentences = self.appositive_pass(profile, sentences, records);
        self.emphatic_pass(profile, sentences, records)
    }

    /// `label.` + `tld …`, with the three-sentence `label.` + `tld` +
    /// continuation form.
    fn domain_pass(
        &self,
        profile: &LanguageProfile,
        input: Vec<Sentence>,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<Sentence> {
        let mut out: Vec<(usize, Sentence)> = Vec::with_capacity(input.len());
        let mut input = input.into_iter().enumerate().peekable();
        while let Some((i, current)) = input.next() {
            let Some(&mut (prev_index, ref mut previous)) = out.last_mut() else {
                out.push((i, current));
                continue;
            };
            let Some(label) = self.domain_label_of(previous) else {
                out.push((i, current));
                continue;
            };
            let Some(tld) = self.leading_tld_of(&current) else {
                out.push((i, current));
                continue;
            };

            if self.use_exclusions && profile.is_excluded_label(&label) {
                out.push((i, current));
                continue;
            }
            // Natural-language guard: ordinary prose also ends in short words
            // followed by a TLD-looking sentence start.
            if previous.text.chars().count() >= 50
                && !label.chars().next().is_some_and(char::is_uppercase)
            {
                records.push(skip_record(
                    MergeKind::Domain,
                    smallvec![prev_index, i],
                    "natural_language_guard",
                    previous,
                    &current,
                ));
                out.push((i, current));
                continue;
            }
            if speakers_conflict(previous, &current) {
                records.push(skip_record(
                    MergeKind::Domain,
                    smallvec![prev_index, i],
                    "speaker_boundary_conflict",
                    previous,
                    &current,
                ));
                out.push((i, current));
                continue;
            }

            let rest = current
                .text
                .split_once(char::is_whitespace)
                .map(|(_, rest)| rest.trim_start().to_string());
            match rest {
                // Two-sentence form: "label." + "tld remainder".
                Some(rest) if !rest.is_empty() => {
                    let after = format!("{}{} {}", previous.text, tld, rest);
                    records.push(MergeRecord {
                        kind: MergeKind::Domain,
                        sentence_indices: smallvec![prev_index, i],
                        reason: "domain_split_repaired".into(),
                        speakers: boundary_speakers(previous, &current),
                        before: vec![previous.text.clone(), current.text.clone()],
                        after: Some(after.clone()),
                    });
                    *previous = fuse(std::mem::take(previous), current, after);
                }
                // The next sentence is the TLD alone: try the three-sentence
                // form before settling for "label.tld."
                _ => {
                    let continuation = input
                        .peek()
                        .filter(|(_, third)| !speakers_conflict(&current, third))
                        .cloned();
                    if let Some((third_index, third)) = continuation {
                        input.next();
                        let after = format!("{}{} {}", previous.text, tld, third.text);
                        records.push(MergeRecord {
                            kind: MergeKind::Domain,
                            sentence_indices: smallvec![prev_index, i, third_index],
                            reason: "domain_split_repaired".into(),
                            speakers: boundary_speakers(previous, &third),
                            before: vec![
                                previous.text.clone(),
                                current.text.clone(),
                                third.text.clone(),
                            ],
                            after: Some(after.clone()),
                        });
                        let fused = fuse(std::mem::take(previous), current, String::new());
                        *previous = fuse(fused, third, after);
                    } else {
                        let terminal = current
                            .text
                            .chars()
                            .last()
                            .filter(|c| tokens::TERMINALS.contains(c))
                            .unwrap_or('.');
                        let after = format!("{}{}{}", previous.text, tld, terminal);
                        records.push(MergeRecord {
                            kind: MergeKind::Domain,
                            sentence_indices: smallvec![prev_index, i],
                            reason: "domain_split_repaired".into(),
                            speakers: boundary_speakers(previous, &current),
                            before: vec![previous.text.clone(), current.text.clone()],
                            after: Some(after.clone()),
                        });
                        *previous = fuse(std::mem::take(previous), current, after);
                    }
                }
            }
        }
        out.into_iter().map(|(_, s)| s).collect()
    }

    fn domain_label_of(&self, sentence: &Sentence) -> Option<String> {
        self.domain_head
            .captures(&sentence.text)
            .map(|caps| caps[1].to_string())
    }

    fn leading_tld_of(&self, sentence: &Sentence) -> Option<String> {
        let first = sentence.text.split_whitespace().next()?;
        let stripped = tokens::strip_word(first);
        self.single_tlds
            .iter()
            .any(|t| *t == stripped)
            .then_some(stripped)
    }

    /// `\d{1,3}.` + `\d{1,3}%?…` reconstructs a decimal or percentage.
    fn decimal_pass(&self, input: Vec<Sentence>, records: &mut Vec<MergeRecord>) -> Vec<Sentence> {
        let mut out: Vec<(usize, Sentence)> = Vec::with_capacity(input.len());
        for (i, current) in input.into_iter().enumerate() {
            let Some(&mut (prev_index, ref mut previous)) = out.last_mut() else {
                out.push((i, current));
                continue;
            };
            let candidate = self.decimal_head.is_match(&previous.text)
                && self.decimal_tail.is_match(&current.text);
            if !candidate {
                out.push((i, current));
                continue;
            }
            if speakers_conflict(previous, &current) {
                records.push(skip_record(
                    MergeKind::Decimal,
                    smallvec![prev_index, i],
                    "speaker_boundary_conflict",
                    previous,
                    &current,
                ));
                out.push((i, current));
                continue;
            }
            // "99." + "9% de los casos." concatenates without a space.
            let after = format!("{}{}", previous.text, current.text);
            records.push(MergeRecord {
                kind: MergeKind::Decimal,
                sentence_indices: smallvec![prev_index, i],
                reason: "decimal_split_repaired".into(),
                speakers: boundary_speakers(previous, &current),
                before: vec![previous.text.clone(), current.text.clone()],
                after: Some(after.clone()),
            });
            *previous = fuse(std::mem::take(previous), current, after);
        }
        out.into_iter().map(|(_, s)| s).collect()
    }

    /// Language-specific apposition: `… de Texas.` + `Estados Unidos …`.
    fn appositive_pass(
        &self,
        profile: &LanguageProfile,
        input: Vec<Sentence>,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<Sentence> {
        if profile.geo_appositions().is_empty() {
            return input;
        }
        let mut out: Vec<(usize, Sentence)> = Vec::with_capacity(input.len());
        for (i, current) in input.into_iter().enumerate() {
            let Some(&mut (prev_index, ref mut previous)) = out.last_mut() else {
                out.push((i, current));
                continue;
            };
            let candidate = self.appositive_head.is_match(&previous.text)
                && profile
                    .geo_appositions()
                    .iter()
                    .any(|head| current.text.starts_with(head));
            if !candidate {
                out.push((i, current));
                continue;
            }
            if speakers_conflict(previous, &current) {
                records.push(skip_record(
                    MergeKind::Appositive,
                    smallvec![prev_index, i],
                    "speaker_boundary_conflict",
                    previous,
                    &current,
                ));
                out.push((i, current));
                continue;
            }
            let head = previous.text.trim_end_matches('.');
            let after = format!("{}, {}", head, current.text);
            records.push(MergeRecord {
                kind: MergeKind::Appositive,
                sentence_indices: smallvec![prev_index, i],
                reason: "appositive_joined".into(),
                speakers: boundary_speakers(previous, &current),
                before: vec![previous.text.clone(), current.text.clone()],
                after: Some(after.clone()),
            });
            *previous = fuse(std::mem::take(previous), current, after);
        }
        out.into_iter().map(|(_, s)| s).collect()
    }

    /// Runs of one-particle sentences collapse into a comma-joined sentence.
    fn emphatic_pass(
        &self,
        profile: &LanguageProfile,
        input: Vec<Sentence>,
        records: &mut Vec<MergeRecord>,
    ) -> Vec<Sentence> {
        let mut out: Vec<Sentence> = Vec::with_capacity(input.len());
        let mut i = 0;
        while i < input.len() {
            if !self.is_emphatic_only(profile, &input[i]) {
                out.push(input[i].clone());
                i += 1;
                continue;
            }
            // Extend the run while the particles keep coming and no known
            // speaker pair disagrees.
            let mut j = i + 1;
            while j < input.len() && self.is_emphatic_only(profile, &input[j]) {
                if speakers_conflict(&input[j - 1], &input[j]) {
                    records.push(skip_record(
                        MergeKind::Emphatic,
                        smallvec![j - 1, j],
                        "speaker_boundary_conflict",
                        &input[j - 1],
                        &input[j],
                    ));
                    break;
                }
                j += 1;
            }
            if j - i < 2 {
                out.push(input[i].clone());
                i += 1;
                continue;
            }

            let run = &input[i..j];
            let particles: Vec<String> =
                run.iter().map(|s| tokens::strip_word(&s.text)).collect();
            let terminal = run
                .last()
                .and_then(|s| s.text.chars().last())
                .filter(|c| tokens::TERMINALS.contains(c))
                .unwrap_or('.');
            let mut after = tokens::capitalize_first(&particles[0]);
            for particle in &particles[1..] {
                after.push_str(", ");
                after.push_str(particle);
            }
            after.push(terminal);

            records.push(MergeRecord {
                kind: MergeKind::Emphatic,
                sentence_indices: (i..j).collect(),
                reason: "emphatic_run_collapsed".into(),
                speakers: run
                    .iter()
                    .map(|s| s.primary_speaker().map(str::to_string))
                    .collect(),
                before: run.iter().map(|s| s.text.clone()).collect(),
                after: Some(after.clone()),
            });

            let mut fused = run[0].clone();
            for sentence in &run[1..] {
                fused = fuse(fused, sentence.clone(), String::new());
            }
            fused.text = after;
            out.push(fused);
            i = j;
        }
        out
    }

    fn is_emphatic_only(&self, profile: &LanguageProfile, sentence: &Sentence) -> bool {
        let mut words = sentence.text.split_whitespace();
        let (Some(first), None) = (words.next(), words.next()) else {
            return false;
        };
        profile.is_emphatic(first)
    }
}

/// Known, differing speakers at the merge boundary.
fn speakers_conflict(previous: &Sentence, next: &Sentence) -> bool {
    match (previous.final_speaker(), next.primary_speaker()) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}

fn boundary_speakers(previous: &Sentence, next: &Sentence) -> Vec<Option<SpeakerId>> {
    vec![
        previous.final_speaker().map(str::to_string),
        next.primary_speaker().map(str::to_string),
    ]
}

fn skip_record(
    kind: MergeKind,
    sentence_indices: SmallVec<[usize; 3]>,
    reason: &str,
    previous: &Sentence,
    next: &Sentence,
) -> MergeRecord {
    MergeRecord {
        kind,
        sentence_indices,
        reason: reason.into(),
        speakers: boundary_speakers(previous, next),
        before: vec![previous.text.clone(), next.text.clone()],
        after: None,
    }
}

/// Combine two sentences: utterance lists are concatenated (adjacent
/// same-speaker runs coalesce) and the time ranges union.
fn fuse(mut previous: Sentence, next: Sentence, text: String) -> Sentence {
    let mut utterances: Vec<Utterance> = std::mem::take(&mut previous.utterances);
    for utterance in next.utterances {
        match utterances.last_mut() {
            Some(last) if last.speaker == utterance.speaker => {
                last.end_word = utterance.end_word;
                if !utterance.text.is_empty() {
                    if !last.text.is_empty() {
                        last.text.push(' ');
                    }
                    last.text.push_str(&utterance.text);
                }
            }
            _ => utterances.push(utterance),
        }
    }
    let time_range = match (previous.time_range, next.time_range) {
        (Some(a), Some(b)) => Some((a.0, b.1)),
        (a, b) => a.or(b),
    };
    Sentence {
        text: if text.is_empty() { previous.text } else { text },
        utterances,
        time_range,
    }
}
