//! Selective copy of direct directory children by file-name suffix.

use crate::Result;
use crate::StageError;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;
use crate::report::CopyReport;
use std::fs;
use std::fs::File;
use std::path::Path;

/// Copies every direct child of `source_dir` whose name ends with `suffix`
/// into `target_dir`, creating the target directory if it does not exist.
///
/// The filter is an exact, case-sensitive trailing-substring match on the
/// file name; an empty suffix matches everything. Matching is
/// non-recursive: subdirectories of the source are not descended into, and
/// a matching entry that is itself a directory is an error. Same-named
/// files already present in the target are silently overwritten; unrelated
/// files in the target are left untouched.
///
/// Entries are processed in filesystem listing order and the first failure
/// aborts the remaining enumeration.
///
/// # Examples
///
/// ```no_run
/// use stagekit_core::copy_by_suffix;
/// use std::path::Path;
///
/// let report = copy_by_suffix(Path::new("build/out"), ".dll", Path::new("stage/bin"))?;
/// println!("staged {} files", report.files_copied);
/// # Ok::<(), stagekit_core::StageError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `source_dir` does not exist
/// - the target directory cannot be created
/// - a matching entry is a directory (`StageError::ExpectedFile`)
/// - any single copy fails (not-found, permission denied, disk full)
pub fn copy_by_suffix(source_dir: &Path, suffix: &str, target_dir: &Path) -> Result<CopyReport> {
    if !source_dir.exists() {
        return Err(StageError::SourceNotFound {
            path: source_dir.to_path_buf(),
        });
    }

    // Target must exist before any copy is attempted.
    fs::create_dir_all(target_dir)?;

    let mut report = CopyReport::default();
    let mut buffer = CopyBuffer::new();
    let start = std::time::Instant::now();

    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let name = entry.file_name();

        if !matches_suffix(&name.to_string_lossy(), suffix) {
            continue;
        }

        let source_path = entry.path();
        if entry.file_type()?.is_dir() {
            return Err(StageError::ExpectedFile { path: source_path });
        }

        let target_path = target_dir.join(&name);
        let mut input = File::open(&source_path)?;
        // File::create truncates, so a same-named file is overwritten.
        let mut output = File::create(&target_path)?;
        report.bytes_copied += copy_with_buffer(&mut input, &mut output, &mut buffer)?;
        report.files_copied += 1;
    }

    report.duration = start.elapsed();

    Ok(report)
}

/// Exact trailing-substring match on a file name.
///
/// No glob or regex semantics; an empty suffix matches every name.
#[must_use]
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}
