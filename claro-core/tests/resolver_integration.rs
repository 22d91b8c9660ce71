//! End-to-end resolution tests over the public API.

use claro_core::{
    Config, LanguageProfile, SentenceResolver, SpeakerSpan, TimedSegment, TimedSpeakerSegment,
    TranscriptInput,
};

fn spanish() -> SentenceResolver {
    SentenceResolver::with_language("es").unwrap()
}

#[test]
fn connector_continuity_for_a_single_known_speaker() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(
            0.0,
            4.0,
            "pues ayer estuvimos hablando mucho sobre todo este nuevo trabajo.",
        ),
        TimedSegment::new(4.0, 8.0, "Y este meta es importante para nosotros dos hoy también"),
    ])
    .with_speaker_segments(vec![TimedSpeakerSegment {
        start: 0.0,
        end: 8.0,
        speaker: "SPEAKER_00".into(),
    }]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 1);
    let text = &output.sentences[0].text;
    assert!(text.contains("trabajo y este meta"), "got: {text}");
    assert!(!text.contains("trabajo."), "no period before the connector");
    assert_eq!(output.sentences[0].primary_speaker(), Some("SPEAKER_00"));
    assert_eq!(output.audit.removed_periods.len(), 1);
}

#[test]
fn number_lists_never_strand_the_last_item() {
    let resolver = spanish();
    // Recognizer segments split the enumeration right before its last item.
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 6.0, "hablamos del episodio 147, 151, 156, 164, 170, 177 y"),
        TimedSegment::new(6.0, 9.0, "184 y muchos más episodios interesantes de la temporada"),
    ]);

    let output = resolver.resolve(input).unwrap();
    for sentence in &output.sentences {
        assert_ne!(sentence.text, "184.", "no stranded list item");
        assert!(!sentence.text.ends_with("y."), "no sentence ends on a connector");
    }
}

#[test]
fn no_sentence_ends_on_a_forbidden_word() {
    let resolver = spanish();
    let profile = LanguageProfile::new(claro_core::Language::Spanish);
    // Boundaries land on a preposition, an auxiliary, and a conjunction.
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 3.0, "el resultado del experimento depende mucho de"),
        TimedSegment::new(3.0, 6.0, "los datos que hemos recogido durante meses y"),
        TimedSegment::new(6.0, 9.0, "la verdad es que el análisis ya está"),
        TimedSegment::new(9.0, 12.0, "terminado desde el viernes pasado por la tarde"),
    ]);

    let output = resolver.resolve(input).unwrap();
    for sentence in &output.sentences {
        let last = sentence.text.split_whitespace().last().unwrap();
        assert!(
            !profile.forbids_ending(last),
            "sentence ends on forbidden word: {}",
            sentence.text
        );
    }
}

#[test]
fn decimal_integrity_across_segments() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 5.0, "la eficacia del tratamiento que probamos llega hasta el 99."),
        TimedSegment::new(5.0, 7.0, "9% de los casos"),
    ]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 1);
    assert!(
        output.sentences[0].text.contains("99.9%"),
        "got: {}",
        output.sentences[0].text
    );
    assert_eq!(output.stats.merges_applied, 1);
}

#[test]
fn domain_guard_keeps_prose_apart() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 5.0, "hace poco vimos un modelo nuevo que era capaz de jugar."),
        TimedSegment::new(5.0, 9.0, "Es que vamos a tratar el tema con mucha calma"),
    ]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 2);
    for sentence in &output.sentences {
        assert!(!sentence.text.contains("jugar.es"), "got: {}", sentence.text);
    }
}

#[test]
fn real_domains_survive_resolution() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![TimedSegment::new(
        0.0,
        6.0,
        "puedes encontrar todos los episodios del programa en nuestra página example.com ahora mismo",
    )]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 1);
    assert!(output.sentences[0].text.contains("example.com"));
}

#[test]
fn emphatic_bursts_collapse_for_one_speaker() {
    let config = Config::builder()
        .language("es")
        .min_words_before_split(1)
        .min_transcript_words(1)
        .build()
        .unwrap();
    let resolver = SentenceResolver::with_config(config).unwrap();
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 0.4, "no."),
        TimedSegment::new(0.4, 0.8, "no."),
        TimedSegment::new(0.8, 1.2, "no."),
    ]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 1);
    assert_eq!(output.sentences[0].text, "No, no, no.");
}

#[test]
fn speaker_isolation_blocks_cross_speaker_merges() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(0.0, 0.5, "no"),
        TimedSegment::new(0.5, 1.0, "no"),
    ])
    .with_speaker_spans(vec![
        SpeakerSpan {
            start_word: 0,
            end_word: 1,
            speaker: Some("SPEAKER_00".into()),
        },
        SpeakerSpan {
            start_word: 1,
            end_word: 2,
            speaker: Some("SPEAKER_01".into()),
        },
    ]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 2, "differing speakers never merge");
    assert_eq!(output.sentences[0].text, "No.");
    assert_eq!(output.sentences[1].text, "No.");
    assert!(output
        .audit
        .merges
        .iter()
        .any(|r| r.reason == "speaker_boundary_conflict"));
}

#[test]
fn speaker_turn_splits_inside_one_segment() {
    let resolver = spanish();
    let input = TranscriptInput::from_segments(vec![TimedSegment::new(
        0.0,
        10.0,
        "bueno yo creo que esto ya está listo señores gracias y ahora pasamos a la siguiente parte",
    )])
    .with_speaker_segments(vec![
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

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 2);
    assert_eq!(output.sentences[0].primary_speaker(), Some("SPEAKER_00"));
    assert_eq!(output.sentences[1].primary_speaker(), Some("SPEAKER_01"));
    assert!(!output.sentences[0].has_speaker_changes());
}

#[test]
fn resolution_is_deterministic() {
    let resolver = spanish();
    let make_input = || {
        TranscriptInput::from_segments(vec![
            TimedSegment::new(0.0, 4.0, "pues hoy vamos a repasar todos los temas del examen."),
            TimedSegment::new(4.0, 8.0, "Y después haremos una pausa para comer algo juntos"),
        ])
    };
    let first = resolver.resolve(make_input()).unwrap();
    let second = resolver.resolve(make_input()).unwrap();
    assert_eq!(first.sentences, second.sentences);
    assert_eq!(first.audit, second.audit);
}

#[test]
fn malformed_segments_degrade_to_plain_text() {
    let resolver = spanish();
    // Reversed timestamps: the segment boundary signal is dropped, the text
    // itself still resolves.
    let input = TranscriptInput::from_segments(vec![
        TimedSegment::new(5.0, 1.0, "hola a todos los oyentes"),
        TimedSegment::new(0.5, 0.1, "bienvenidos una vez más"),
    ]);

    let output = resolver.resolve(input).unwrap();
    assert_eq!(output.stats.sentence_count, 1);
    assert!(output.sentences[0].text.starts_with("Hola a todos"));
    assert!(output.sentences[0].time_range.is_none());
}
