//! JSON writer

use super::SentenceWriter;
use anyhow::Result;
use claro_core::Sentence;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonSentence<'a> {
    text: &'a str,
    speaker: Option<&'a str>,
    start: Option<f64>,
    end: Option<f64>,
    utterances: Vec<JsonUtterance<'a>>,
}

#[derive(Serialize)]
struct JsonUtterance<'a> {
    text: &'a str,
    speaker: Option<&'a str>,
}

/// Buffers sentences and emits one JSON array on finish.
pub struct JsonWriter<W: Write> {
    writer: W,
    sentences: Vec<Sentence>,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send> SentenceWriter for JsonWriter<W> {
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        self.sentences.push(sentence.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let view: Vec<JsonSentence<'_>> = self
            .sentences
            .iter()
            .map(|s| JsonSentence {
                text: &s.text,
                speaker: s.primary_speaker(),
                start: s.time_range.map(|(start, _)| start),
                end: s.time_range.map(|(_, end)| end),
                utterances: s
                    .utterances
                    .iter()
                    .map(|u| JsonUtterance {
                        text: &u.text,
                        speaker: u.speaker.as_deref(),
                    })
                    .collect(),
            })
            .collect();
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &view)?;
        } else {
            serde_json::to_writer(&mut self.writer, &view)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claro_core::Utterance;

    #[test]
    fn emits_a_json_array_with_attribution() {
        let sentence = Sentence {
            text: "Hola a todos.".into(),
            utterances: vec![Utterance {
                text: "Hola a todos.".into(),
                speaker: Some("SPEAKER_00".into()),
                start_word: 0,
                end_word: 3,
            }],
            time_range: Some((0.0, 2.0)),
        };
        let mut buffer = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buffer, false);
            writer.write_sentence(&sentence).unwrap();
            writer.finish().unwrap();
        }
        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["text"], "Hola a todos.");
        assert_eq!(parsed[0]["speaker"], "SPEAKER_00");
        assert_eq!(parsed[0]["start"], 0.0);
    }
}
