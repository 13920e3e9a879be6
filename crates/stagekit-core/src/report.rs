//! Operation reporting for staging and archiving.

use std::time::Duration;

/// Report of a selective copy operation.
///
/// # Examples
///
/// ```
/// use stagekit_core::CopyReport;
///
/// let mut report = CopyReport::default();
/// report.files_copied = 2;
/// report.bytes_copied = 1024;
/// assert_eq!(report.files_copied, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    /// Number of files copied into the target directory.
    pub files_copied: usize,

    /// Total bytes copied.
    pub bytes_copied: u64,

    /// Duration of the copy operation.
    pub duration: Duration,
}

impl CopyReport {
    /// Creates a new empty copy report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Report of a directory archiving operation.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Number of file entries written to the archive sink.
    pub files_added: usize,

    /// Total uncompressed bytes written to the sink.
    pub bytes_written: u64,

    /// Duration of the archiving operation.
    pub duration: Duration,
}

impl ArchiveReport {
    /// Creates a new empty archive report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
