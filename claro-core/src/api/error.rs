//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// The resolution core itself never raises: malformed collaborator data
/// degrades to conservative behavior. These variants cover only the
/// construction and configuration surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid language specification
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
