//! Plain text writer
//!
//! One sentence per paragraph. The separator is uniform: a speaker change
//! never adds an extra blank line, attribution is carried inline instead.

use super::SentenceWriter;
use anyhow::Result;
use claro_core::Sentence;
use std::io::Write;

/// Paragraph-per-sentence writer.
pub struct TextWriter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first: true,
        }
    }
}

impl<W: Write + Send> SentenceWriter for TextWriter<W> {
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        if !self.first {
            writeln!(self.writer)?;
        }
        self.first = false;
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
