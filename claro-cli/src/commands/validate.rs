//! Validate command implementation

use anyhow::Result;
use clap::Args;

use crate::input::{resolve_patterns, TranscriptDocument};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Transcript documents to check (supports glob patterns)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ValidateArgs {
    /// Check that every document parses and its speaker list is coherent.
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let mut failures = 0usize;

        for path in &files {
            match TranscriptDocument::from_path(path).and_then(|doc| {
                let summary = format!(
                    "language={} segments={} speakers={}",
                    doc.language.as_deref().unwrap_or("-"),
                    doc.segments.len(),
                    doc.speakers.len(),
                );
                doc.into_input().map(|_| summary)
            }) {
                Ok(summary) => println!("ok   {} ({summary})", path.display()),
                Err(err) => {
                    failures += 1;
                    eprintln!("FAIL {}: {err:#}", path.display());
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{failures} of {} documents failed validation", files.len());
        }
        println!("{} documents valid", files.len());
        Ok(())
    }
}
