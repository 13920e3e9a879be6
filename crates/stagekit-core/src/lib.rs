//! File staging and directory archiving library for CI pipelines.
//!
//! `stagekit-core` provides two stateless operations used when staging
//! build artifacts:
//!
//! - [`copy_by_suffix`] copies the direct children of a directory whose
//!   names end with a given suffix into a target directory.
//! - [`archive_tree`] walks a directory tree and writes every regular file
//!   into a caller-owned [`ArchiveSink`] under its root-relative path.
//!
//! # Examples
//!
//! ```no_run
//! use stagekit_core::copy_by_suffix;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = copy_by_suffix(Path::new("build/out"), ".pdb", Path::new("stage/symbols"))?;
//! println!("staged {} files", report.files_copied);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod copy;
pub mod error;
pub mod io;
pub mod report;
pub mod walker;

// Re-export main API types
pub use archive::ArchiveSink;
pub use archive::ZipSink;
pub use archive::archive_tree;
pub use copy::copy_by_suffix;
pub use error::Result;
pub use error::StageError;
pub use report::ArchiveReport;
pub use report::CopyReport;
pub use walker::FileEntry;
pub use walker::FileWalker;
