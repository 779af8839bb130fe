//! Streaming file copy.
//!
//! - Writes to a newly created destination file (O_EXCL semantics; never clobbers).
//! - Buffered I/O with a caller-chosen buffer size — no process-wide knob.
//! - Optional full fsync for strong durability guarantees.
//!
//! Handles are owned by this function and dropped on every exit path, so no
//! descriptor outlives the call regardless of which branch fails.
//!
//! Snapshot semantics: the source is read once from start to EOF; if it grows
//! concurrently the extra bytes are not included, and truncation surfaces as a
//! read error or early EOF.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Durability mode controlling post-write flush behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DurabilityMode {
    /// Flush written data to the OS page cache but do not force a disk
    /// barrier. Fastest; may lose data on sudden power loss.
    #[default]
    Data,
    /// Force data and metadata to stable storage (`sync_all`).
    Full,
}

/// Per-call transfer configuration, threaded explicitly through every copy.
#[derive(Clone, Copy, Debug)]
pub struct TransferOptions {
    /// I/O chunk size for the buffered reader and writer.
    pub buffer_size: usize,
    /// Post-write flush behavior for each copied file.
    pub durability: DurabilityMode,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            buffer_size: 512 * 1024,
            durability: DurabilityMode::Data,
        }
    }
}

/// Copy `src` -> `dst` using buffered I/O. Returns the number of bytes written.
///
/// `dst` is created with `create_new(true)`; callers delete an existing
/// destination first when the conflict policy says so.
pub(super) fn copy_streaming(src: &Path, dst: &Path, opts: &TransferOptions) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(opts.buffer_size, src_f);
    let mut writer = BufWriter::with_capacity(opts.buffer_size, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    let dst_f = writer.into_inner().map_err(|e| e.into_error())?;

    if opts.durability == DurabilityMode::Full {
        dst_f.sync_all()?;
    }

    Ok(bytes)
}
