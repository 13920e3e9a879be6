//! Directory tree walking with root-relative path computation.

use crate::Result;
use crate::StageError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A regular file found under a walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Path relative to the walk root, used as the archive entry name.
    pub relative_path: PathBuf,

    /// File size in bytes.
    pub size: u64,
}

/// Walks a directory tree top-down and yields every regular file it
/// contains.
///
/// Directory entries themselves are never yielded, so empty directories
/// leave no trace in the output. Within a directory, files come back in
/// filesystem listing order; no lexical ordering is guaranteed.
///
/// Relative paths are computed with `Path::strip_prefix` against the root,
/// which is insensitive to a trailing separator on the supplied root.
///
/// # Examples
///
/// ```no_run
/// use stagekit_core::walker::FileWalker;
/// use std::path::Path;
///
/// let walker = FileWalker::new(Path::new("./artifacts"));
/// for entry in walker.walk() {
///     let entry = entry.unwrap();
///     println!("{}", entry.relative_path.display());
/// }
/// ```
pub struct FileWalker<'a> {
    root: &'a Path,
}

impl<'a> FileWalker<'a> {
    /// Creates a walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Returns an iterator over the regular files under the root.
    ///
    /// # Errors
    ///
    /// Entries may error if the traversal fails (permission denied,
    /// filesystem loop) or file metadata cannot be read. Symlinks and
    /// special files are not special-cased; whatever the filesystem
    /// reports for them surfaces unchanged.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry>> + '_ {
        WalkDir::new(self.root).into_iter().filter_map(move |entry| {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    Some(self.build_entry(&entry))
                }
                Err(e) => Some(Err(StageError::Io(std::io::Error::other(format!(
                    "walkdir error: {e}"
                ))))),
            }
        })
    }

    fn build_entry(&self, entry: &walkdir::DirEntry) -> Result<FileEntry> {
        let path = entry.path().to_path_buf();
        let metadata = entry.metadata().map_err(|e| {
            StageError::Io(std::io::Error::other(format!(
                "cannot read metadata for {}: {e}",
                path.display()
            )))
        })?;

        let relative_path = path
            .strip_prefix(self.root)
            .map_err(|_| StageError::OutsideRoot {
                path: path.clone(),
                root: self.root.to_path_buf(),
            })?
            .to_path_buf();

        Ok(FileEntry {
            path,
            relative_path,
            size: metadata.len(),
        })
    }
}
