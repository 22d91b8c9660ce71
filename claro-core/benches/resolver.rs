//! Resolution throughput over a synthetic multi-segment transcript.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use claro_core::{SentenceResolver, TimedSegment, TimedSpeakerSegment, TranscriptInput};

fn synthetic_segments(count: usize) -> Vec<TimedSegment> {
    let phrases = [
        "pues hoy vamos a repasar todos los temas del examen final.",
        "Y después haremos una pausa para comer algo juntos en la cafetería",
        "la verdad es que el análisis ya está terminado desde el viernes",
        "hablamos del episodio 147, 151, 156, 164, 170, 177 y 184 de la temporada",
    ];
    (0..count)
        .map(|i| {
            TimedSegment::new(
                i as f64 * 4.0,
                (i + 1) as f64 * 4.0,
                phrases[i % phrases.len()],
            )
        })
        .collect()
}

fn synthetic_speakers(count: usize) -> Vec<TimedSpeakerSegment> {
    (0..count)
        .map(|i| TimedSpeakerSegment {
            start: i as f64 * 8.0,
            end: (i + 1) as f64 * 8.0,
            speaker: format!("SPEAKER_{:02}", i % 3),
        })
        .collect()
}

fn bench_resolution(c: &mut Criterion) {
    let resolver = SentenceResolver::with_language("es").unwrap();

    c.bench_function("resolve_100_segments", |b| {
        let segments = synthetic_segments(100);
        b.iter(|| {
            let input = TranscriptInput::from_segments(black_box(segments.clone()));
            resolver.resolve(input).unwrap()
        })
    });

    c.bench_function("resolve_100_segments_with_diarization", |b| {
        let segments = synthetic_segments(100);
        let speakers = synthetic_speakers(50);
        b.iter(|| {
            let input = TranscriptInput::from_segments(black_box(segments.clone()))
                .with_speaker_segments(black_box(speakers.clone()));
            resolver.resolve(input).unwrap()
        })
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
