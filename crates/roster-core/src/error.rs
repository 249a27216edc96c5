//! Error types for roster-core

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which export a record set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Guild,
    Meetup,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Guild => write!(f, "Guild"),
            SourceKind::Meetup => write!(f, "Meetup"),
        }
    }
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required column is absent from an input
    Schema,
    /// An input could not be opened or parsed as CSV
    InputRead,
    /// The output destination could not be written
    OutputWrite,
    /// The correction table could not be loaded or saved
    Config,
}

/// Errors that can occur in roster-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the header row
    #[error("{source_kind} file '{path}' is missing required column '{column}'")]
    MissingColumn {
        source_kind: SourceKind,
        path: PathBuf,
        column: String,
    },

    /// Failed to write the merged roster
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to read or write a name correction table
    #[error("failed to access corrections file '{path}': {source}")]
    CorrectionsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileRead { .. } | Error::Csv { .. } => ErrorKind::InputRead,
            Error::MissingColumn { .. } => ErrorKind::Schema,
            Error::OutputWrite { .. } => ErrorKind::OutputWrite,
            Error::CorrectionsFile { .. } | Error::Json(_) => ErrorKind::Config,
        }
    }
}
