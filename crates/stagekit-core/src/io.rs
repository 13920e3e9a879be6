//! Buffered file copy primitive with a reusable buffer.
//!
//! Provides a stack-allocated copy buffer so that staging and archiving
//! operations do not heap-allocate on every file they touch.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::StageError;

/// Buffer size for I/O operations (64 KB).
///
/// Matches typical filesystem block sizes and balances memory usage
/// against throughput.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Stack-allocated buffer for efficient file copying.
///
/// The buffer is reusable across multiple copy operations within the same
/// staging or archiving session.
///
/// # Examples
///
/// ```no_run
/// # use stagekit_core::io::{CopyBuffer, copy_with_buffer};
/// # use stagekit_core::StageError;
/// # fn example() -> Result<(), StageError> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("input.txt")?;
/// let mut output = std::fs::File::create("output.txt")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// println!("Copied {} bytes", bytes_copied);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        COPY_BUFFER_SIZE
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies data from reader to writer using the provided reusable buffer.
///
/// Retries reads interrupted by signals and returns the total number of
/// bytes copied.
///
/// # Errors
///
/// Returns an error if reading from the source or writing to the
/// destination fails.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, StageError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StageError::Io(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(StageError::Io)?;

        total += bytes_read as u64;
    }

    Ok(total)
}
