//! Error types for note and index operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed note header
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The file ended before the five header lines were read
    #[error("header line {line} is missing (expected 5 header lines)")]
    MissingLine {
        /// Zero-based line index
        line: usize,
    },

    /// A key line has no `:` separator
    #[error("header line {line} has no ':' separator: {content:?}")]
    MissingSeparator {
        /// Zero-based line index
        line: usize,
        /// Raw line content
        content: String,
    },
}

/// Error type for notebook operations
#[derive(Debug, Error)]
pub enum NotebookError {
    /// IO error creating, reading, writing or replacing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A note file with the generated name already exists
    #[error("Note already exists: {}", path.display())]
    AlreadyExists {
        /// Path that could not be created
        path: PathBuf,
    },

    /// A note's header could not be parsed
    #[error("Malformed header in {}", path.display())]
    Format {
        /// Offending note file
        path: PathBuf,
        /// Grammar violation
        #[source]
        source: HeaderError,
    },

    /// The index file has never been written
    #[error("Index not found at {} (run a rebuild first)", path.display())]
    IndexNotFound {
        /// Expected index location
        path: PathBuf,
    },

    /// Note file name pattern could not be compiled
    #[error("Invalid note pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Index JSON could not be encoded or decoded
    #[error("Index serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Specialized Result type for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;

impl NotebookError {
    /// Attach a file path to a header grammar error
    pub fn format(path: impl Into<PathBuf>, source: HeaderError) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from a malformed note rather than the filesystem
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
