//! Directory archiving into a caller-owned archive sink.
//!
//! The archiver walks a directory tree and hands every regular file to an
//! [`ArchiveSink`]. The sink abstraction keeps archive-format concerns and
//! writer lifecycle (open, finish, close) out of the traversal: the
//! production [`ZipSink`] wraps an already-open `zip::ZipWriter` and never
//! finalizes it, and tests can substitute an in-memory sink.

use crate::Result;
use crate::StageError;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;
use crate::report::ArchiveReport;
use crate::walker::FileWalker;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A writable archive sink accepting (relative path, file contents) pairs.
///
/// Implementations own the mapping from relative paths to archive entry
/// records; they do not own the underlying writer's lifecycle.
pub trait ArchiveSink {
    /// Writes one file entry under `relative_path`, reading its contents
    /// from `reader`. Returns the number of content bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be started or its contents
    /// cannot be read or written.
    fn add_file(&mut self, relative_path: &Path, reader: &mut dyn Read) -> Result<u64>;
}

/// Archive sink writing zip entries through a caller-owned `ZipWriter`.
///
/// The caller opens the writer before constructing the sink and calls
/// `finish` on it afterwards; `ZipSink` only appends entries.
///
/// # Examples
///
/// ```no_run
/// use stagekit_core::archive::{ZipSink, archive_tree};
/// use std::fs::File;
/// use std::path::Path;
/// use zip::ZipWriter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::create("artifacts.zip")?;
/// let mut writer = ZipWriter::new(file);
/// {
///     let mut sink = ZipSink::new(&mut writer);
///     archive_tree(Path::new("build/out"), &mut sink)?;
/// }
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct ZipSink<'a, W: Write + Seek> {
    writer: &'a mut ZipWriter<W>,
    options: SimpleFileOptions,
    buffer: CopyBuffer,
}

impl<'a, W: Write + Seek> ZipSink<'a, W> {
    /// Creates a sink with default deflate compression (level 6).
    #[must_use]
    pub fn new(writer: &'a mut ZipWriter<W>) -> Self {
        Self {
            writer,
            options: zip_options(6),
            buffer: CopyBuffer::new(),
        }
    }

    /// Sets the compression level (0 = stored, 1-9 = deflate).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.options = zip_options(level);
        self
    }
}

impl<W: Write + Seek> ArchiveSink for ZipSink<'_, W> {
    fn add_file(&mut self, relative_path: &Path, reader: &mut dyn Read) -> Result<u64> {
        let entry_name = normalize_entry_name(relative_path)?;

        self.writer
            .start_file(entry_name.as_str(), self.options)
            .map_err(|e| StageError::Archive(format!("failed to start entry {entry_name}: {e}")))?;

        copy_with_buffer(reader, &mut *self.writer, &mut self.buffer)
    }
}

fn zip_options(level: u8) -> SimpleFileOptions {
    if level == 0 {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

/// Walks the directory tree rooted at `root` and writes every regular file
/// into `sink` under its root-relative path.
///
/// Directories are visited top-down; within a directory, files go to the
/// sink in filesystem listing order. Empty directories produce no entries.
/// The sink's underlying writer is neither opened, flushed, nor finalized
/// here.
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist (`StageError::SourceNotFound`)
/// - `root` exists but is not a directory (`StageError::NotADirectory`)
/// - the traversal, a file open, or a sink write fails; the first failure
///   aborts the walk
pub fn archive_tree<S: ArchiveSink + ?Sized>(root: &Path, sink: &mut S) -> Result<ArchiveReport> {
    if !root.exists() {
        return Err(StageError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(StageError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut report = ArchiveReport::default();
    let start = std::time::Instant::now();

    let walker = FileWalker::new(root);
    for entry in walker.walk() {
        let entry = entry?;
        let mut file = File::open(&entry.path)?;
        report.bytes_written += sink.add_file(&entry.relative_path, &mut file)?;
        report.files_added += 1;
    }

    report.duration = start.elapsed();

    Ok(report)
}

/// Normalizes a relative path into a zip entry name.
///
/// Zip entry names use forward slashes regardless of platform.
fn normalize_entry_name(path: &Path) -> Result<String> {
    let path_str = path.to_str().ok_or_else(|| StageError::PathNotUtf8 {
        path: path.to_path_buf(),
    })?;

    #[cfg(windows)]
    let normalized = path_str.replace('\\', "/");

    #[cfg(not(windows))]
    let normalized = path_str.to_string();

    Ok(normalized)
}
