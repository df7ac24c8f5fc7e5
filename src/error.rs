//! Error types for acta processing.
//!
//! The extraction core raises exactly one kind of error, [`Error::Parsing`],
//! and only for two reasons: the source bytes could not be read, or the
//! educational level could not be detected. Every other field degrades to a
//! default value instead of failing.

/// Result type alias for acta processing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message carried by the parsing error raised when no level is found.
pub const LEVEL_NOT_DETECTED: &str = "Level not detected";

/// Error types that can occur while reading, parsing and archiving actas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be turned into metadata.
    #[error("{0}")]
    Parsing(String),

    /// The external text/word provider failed.
    #[error("Text source error: {0}")]
    Source(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed institution directory
    #[error("Invalid institution directory: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP packaging error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Parsing error for source bytes the provider could not open or read.
    pub fn unreadable(detail: impl std::fmt::Display) -> Self {
        Error::Parsing(format!("could not read PDF: {}", detail))
    }

    /// Parsing error for a page with no recognizable educational level.
    pub fn level_not_detected() -> Self {
        Error::Parsing(LEVEL_NOT_DETECTED.to_string())
    }

    /// Whether this is the core's parsing error (as opposed to plumbing failures).
    pub fn is_parsing(&self) -> bool {
        matches!(self, Error::Parsing(_))
    }
}
