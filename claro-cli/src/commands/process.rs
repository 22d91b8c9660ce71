//! Process command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use claro_core::{Config, SentenceResolver};

use crate::input::{resolve_patterns, TranscriptDocument};
use crate::output::{JsonWriter, SentenceWriter, SrtWriter, TextWriter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input transcript documents (supports glob patterns)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language code; overrides the document's own language field
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Disable the common-word exclusion list for domain masking
    #[arg(long)]
    pub no_domain_exclusions: bool,

    /// Minimum chunk length before a recognizer boundary may split
    #[arg(long, value_name = "WORDS")]
    pub min_split_words: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one paragraph per sentence
    Text,
    /// JSON array of sentences with utterances and timings
    Json,
    /// SubRip subtitles with speaker prefixes
    Srt,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting transcript resolution");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let sink: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut writer: Box<dyn SentenceWriter> = match self.format {
            OutputFormat::Text => Box::new(TextWriter::new(sink)),
            OutputFormat::Json => Box::new(JsonWriter::new(sink, true)),
            OutputFormat::Srt => Box::new(SrtWriter::new(sink)),
        };

        for path in &files {
            let document = TranscriptDocument::from_path(path)?;
            let resolver = self.build_resolver(document.language.as_deref())?;
            let output = resolver.resolve(document.into_input()?)?;

            log::info!(
                "{}: {} words -> {} sentences ({} speakers, {} merges, {} skips)",
                path.display(),
                output.stats.word_count,
                output.stats.sentence_count,
                output.stats.speaker_count,
                output.stats.merges_applied,
                output.stats.merges_skipped,
            );
            for removed in &output.audit.removed_periods {
                log::debug!("removed recognizer period at word {removed}");
            }

            for sentence in &output.sentences {
                writer.write_sentence(sentence)?;
            }
            progress.file_completed(&path.display().to_string());
        }

        writer.finish()?;
        progress.finish();
        Ok(())
    }

    fn build_resolver(&self, document_language: Option<&str>) -> Result<SentenceResolver> {
        let language = self
            .language
            .as_deref()
            .or(document_language)
            .unwrap_or("en");
        let mut builder = Config::builder()
            .language(language)
            .use_domain_exclusions(!self.no_domain_exclusions);
        if let Some(words) = self.min_split_words {
            builder = builder.min_words_before_split(words);
        }
        Ok(SentenceResolver::with_config(builder.build()?)?)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
