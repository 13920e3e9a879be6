//! Error types for staging and archiving operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `StageError`.
pub type Result<T> = std::result::Result<T, StageError>;

/// Errors that can occur while staging or archiving files.
///
/// All failures are fatal to the enclosing operation: there is no
/// partial-failure isolation, and callers are expected to abort the
/// surrounding build step on any variant.
#[derive(Error, Debug)]
pub enum StageError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source path does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// A directory entry matched the suffix filter where a regular file
    /// was required.
    #[error("expected a file, found a directory: {path}")]
    ExpectedFile {
        /// The offending directory path.
        path: PathBuf,
    },

    /// Archiver root exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A walked path could not be expressed relative to the walk root.
    #[error("path {path} is not under root directory: {root}")]
    OutsideRoot {
        /// The walked path.
        path: PathBuf,
        /// The walk root.
        root: PathBuf,
    },

    /// Archive entry name is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    PathNotUtf8 {
        /// The offending path.
        path: PathBuf,
    },

    /// The archive writer rejected an entry.
    #[error("archive write error: {0}")]
    Archive(String),
}
