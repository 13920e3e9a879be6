//! Error conversion utilities for CLI.
//!
//! Converts stagekit-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use stagekit_core::StageError;
use std::path::Path;

/// Converts `StageError` to a user-friendly anyhow error with context
pub fn convert_stage_error(err: StageError, operation: &str, subject: &Path) -> anyhow::Error {
    match err {
        StageError::SourceNotFound { path } => {
            anyhow!(
                "Cannot {operation} '{}': source not found: {}\n\
                 HINT: Check that the path exists and the build step producing it ran.",
                subject.display(),
                path.display()
            )
        }
        StageError::ExpectedFile { path } => {
            anyhow!(
                "Cannot {operation} '{}': '{}' is a directory but matched the suffix filter\n\
                 HINT: The copy is non-recursive; move the directory aside or narrow the suffix.",
                subject.display(),
                path.display()
            )
        }
        StageError::NotADirectory { path } => {
            anyhow!(
                "Cannot {operation} '{}': '{}' is not a directory\n\
                 HINT: Pack takes a directory tree, not a single file.",
                subject.display(),
                path.display()
            )
        }
        StageError::Io(io_err) => {
            anyhow!(
                "I/O error while trying to {operation} '{}': {}",
                subject.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Failed to {operation} '{}'", subject.display())),
    }
}
