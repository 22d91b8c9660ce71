//! Output writing module

use anyhow::Result;

use claro_core::Sentence;

/// Trait for sentence writers
pub trait SentenceWriter: Send {
    /// Write a single resolved sentence
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<()>;

    /// Finalize output (close arrays, flush buffers)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod srt;
pub mod text;

pub use json::JsonWriter;
pub use srt::SrtWriter;
pub use text::TextWriter;
