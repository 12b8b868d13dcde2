//! Error types for wikimark

use thiserror::Error;

/// Main error type for wikimark operations.
///
/// The inline engine itself never fails; these errors come from the
/// surfaces around it (configuration files, input and output streams).
#[derive(Error, Debug)]
pub enum WikimarkError {
    /// IO error during file or stream operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

impl From<std::fmt::Error> for WikimarkError {
    fn from(e: std::fmt::Error) -> Self {
        WikimarkError::Render(e.to_string())
    }
}

/// Result type alias for wikimark operations
pub type Result<T> = std::result::Result<T, WikimarkError>;
