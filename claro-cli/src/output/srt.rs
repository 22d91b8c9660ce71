//! SubRip (SRT) writer
//!
//! Cue timings come from the sentences' audio ranges; sentences without one
//! (no timed segments upstream) get sequential fallback slots so the file
//! stays well-formed.

use super::SentenceWriter;
use anyhow::Result;
use claro_core::Sentence;
use std::io::Write;

/// Fallback cue length when a sentence carries no audio range.
const FALLBACK_CUE_SECONDS: f64 = 3.0;

/// Numbered-cue SRT writer.
pub struct SrtWriter<W: Write> {
    writer: W,
    cue: usize,
    clock: f64,
}

impl<W: Write> SrtWriter<W> {
    /// Create a new SRT writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cue: 0,
            clock: 0.0,
        }
    }
}

fn format_timestamp(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let (millis, secs) = (millis % 1000, millis / 1000);
    let (secs, mins) = (secs % 60, secs / 60);
    let (mins, hours) = (mins % 60, mins / 60);
    format!("{hours:02}:{mins:02}:{secs:02},{millis:03}")
}

impl<W: Write + Send> SentenceWriter for SrtWriter<W> {
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        self.cue += 1;
        let (start, end) = sentence.time_range.unwrap_or_else(|| {
            let start = self.clock;
            (start, start + FALLBACK_CUE_SECONDS)
        });
        self.clock = end;

        if self.cue > 1 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", self.cue)?;
        writeln!(
            self.writer,
            "{} --> {}",
            format_timestamp(start),
            format_timestamp(end)
        )?;
        match sentence.primary_speaker() {
            Some(speaker) => writeln!(self.writer, "{speaker}: {}", sentence.text.trim())?,
            None => writeln!(self.writer, "{}", sentence.text.trim())?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claro_core::Utterance;

    fn sentence(text: &str, time_range: Option<(f64, f64)>) -> Sentence {
        Sentence {
            text: text.to_string(),
            utterances: vec![Utterance {
                text: text.to_string(),
                speaker: None,
                start_word: 0,
                end_word: 1,
            }],
            time_range,
        }
    }

    #[test]
    fn timestamps_format_as_subrip() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(61.5), "00:01:01,500");
        assert_eq!(format_timestamp(3661.25), "01:01:01,250");
    }

    #[test]
    fn cues_are_numbered_and_separated() {
        let mut buffer = Vec::new();
        {
            let mut writer = SrtWriter::new(&mut buffer);
            writer
                .write_sentence(&sentence("Hola.", Some((0.0, 1.5))))
                .unwrap();
            writer
                .write_sentence(&sentence("Adiós.", Some((1.5, 3.0))))
                .unwrap();
            writer.finish().unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();
        assert_eq!(
            out,
            "1\n00:00:00,000 --> 00:00:01,500\nHola.\n\n2\n00:00:01,500 --> 00:00:03,000\nAdiós.\n"
        );
    }

    #[test]
    fn missing_time_ranges_get_sequential_slots() {
        let mut buffer = Vec::new();
        {
            let mut writer = SrtWriter::new(&mut buffer);
            writer.write_sentence(&sentence("Uno.", None)).unwrap();
            writer.write_sentence(&sentence("Dos.", None)).unwrap();
            writer.finish().unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("00:00:00,000 --> 00:00:03,000"));
        assert!(out.contains("00:00:03,000 --> 00:00:06,000"));
    }
}
