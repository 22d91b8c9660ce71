//! Claro command-line interface
//!
//! Resolves recognizer/diarizer output documents into speaker-attributed
//! sentences and writes them as text, JSON, or SubRip subtitles.

use anyhow::Result;
use clap::{Parser, Subcommand};

use claro_cli::commands::{ProcessArgs, ValidateArgs};

#[derive(Debug, Parser)]
#[command(
    name = "claro",
    version,
    about = "Resolve ASR transcripts into speaker-attributed sentences"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve transcript documents into sentences
    Process(ProcessArgs),
    /// Check transcript documents without processing them
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
