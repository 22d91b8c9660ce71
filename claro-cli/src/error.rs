//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Malformed transcript document
    InvalidDocument(String),
    /// Resolution error from core
    ResolutionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidDocument(msg) => write!(f, "Invalid transcript document: {msg}"),
            CliError::ResolutionError(msg) => write!(f, "Resolution error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        let error = CliError::FileNotFound("episode.json".to_string());
        assert_eq!(error.to_string(), "File not found: episode.json");

        let error = CliError::InvalidDocument("speakers mix timed and indexed".to_string());
        assert!(error.to_string().starts_with("Invalid transcript document:"));
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::InvalidPattern("[bad".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("InvalidPattern"));
    }
}
