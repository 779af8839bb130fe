//! Copy-or-move engine for files and directory trees.
//!
//! File and directory transfer are mutually recursive: a directory transfer
//! enumerates its direct children and dispatches on each child's kind, so the
//! whole walk is the recursion itself rather than a pre-collected listing.
//!
//! Failure policy: the first failing child aborts the entire operation.
//! Children already transferred stay on disk; there is no rollback. The engine
//! assumes exclusive access to the subtree for the duration of a call and
//! performs no locking.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::TreeOpsError;
use crate::path_ref::{EntryKind, PathRef};
use crate::walker::list_entries;

use super::io_copy::{self, TransferOptions};
use super::purge::delete_all;

/// Whether the source survives the transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

/// Outcome of consulting a [`ConflictPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Delete the existing destination, then proceed.
    Replace,
    /// Leave the destination untouched and report success; the subtree under
    /// it is skipped entirely, not merged.
    Keep,
}

/// Caller-supplied decision capability, consulted each time a destination
/// entry already exists. Passed per call; no global registration.
pub trait ConflictPolicy {
    fn resolve(&mut self, existing: &Path) -> ConflictDecision;
}

impl<F> ConflictPolicy for F
where
    F: FnMut(&Path) -> ConflictDecision,
{
    fn resolve(&mut self, existing: &Path) -> ConflictDecision {
        self(existing)
    }
}

/// Ready-made policy that always overwrites existing destinations.
pub fn replace_existing(_existing: &Path) -> ConflictDecision {
    ConflictDecision::Replace
}

/// Ready-made policy that always keeps existing destinations (skip as success).
pub fn keep_existing(_existing: &Path) -> ConflictDecision {
    ConflictDecision::Keep
}

/// True when `dest` equals `src` or lies anywhere under it. Compared on path
/// components, not canonicalized: the guard is against the engine recursing
/// into its own output, which is a textual relationship.
fn dest_inside_src(src: &Path, dest: &Path) -> bool {
    dest.starts_with(src)
}

/// Transfer a single regular file.
pub(super) fn transfer_file(
    src: &Path,
    dest: &Path,
    mode: TransferMode,
    policy: &mut dyn ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    let src_ref = PathRef::new(src);
    let dest_ref = PathRef::new(dest);
    let (Some(src), Some(dest)) = (src_ref.path(), dest_ref.path()) else {
        bail!(TreeOpsError::BlankPath);
    };
    if src == dest {
        bail!(TreeOpsError::SamePath(src.to_path_buf()));
    }
    match src_ref.kind() {
        EntryKind::File => {}
        EntryKind::Absent => bail!(TreeOpsError::SourceNotFound(src.to_path_buf())),
        EntryKind::Directory => bail!(TreeOpsError::NotAFile(src.to_path_buf())),
    }

    if dest_ref.exists() {
        match policy.resolve(dest) {
            ConflictDecision::Keep => {
                info!(dest = %dest.display(), "destination exists, policy keeps it; nothing to do");
                return Ok(());
            }
            ConflictDecision::Replace => {
                fs::remove_file(dest)
                    .with_context(|| format!("replace existing file '{}'", dest.display()))?;
            }
        }
    }

    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create destination directory '{}'", parent.display()))?;
    }

    let bytes = io_copy::copy_streaming(src, dest, opts)
        .with_context(|| format!("copy '{}' -> '{}'", src.display(), dest.display()))?;
    debug!(src = %src.display(), dest = %dest.display(), bytes, "file content copied");

    if mode == TransferMode::Move {
        fs::remove_file(src)
            .with_context(|| format!("remove source file '{}' after move", src.display()))?;
    }
    Ok(())
}

/// Transfer a directory tree.
pub(super) fn transfer_dir(
    src: &Path,
    dest: &Path,
    mode: TransferMode,
    policy: &mut dyn ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    let src_ref = PathRef::new(src);
    let dest_ref = PathRef::new(dest);
    let (Some(src), Some(dest)) = (src_ref.path(), dest_ref.path()) else {
        bail!(TreeOpsError::BlankPath);
    };

    // Guard against unbounded self-copy before touching anything. Equal paths
    // fail this test too.
    if dest_inside_src(src, dest) {
        bail!(TreeOpsError::DestinationInsideSource {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }

    match src_ref.kind() {
        EntryKind::Directory => {}
        EntryKind::Absent => bail!(TreeOpsError::SourceNotFound(src.to_path_buf())),
        EntryKind::File => bail!(TreeOpsError::NotADirectory(src.to_path_buf())),
    }

    if dest_ref.exists() {
        match policy.resolve(dest) {
            ConflictDecision::Keep => {
                info!(dest = %dest.display(), "destination exists, policy keeps it; subtree skipped");
                return Ok(());
            }
            ConflictDecision::Replace => {
                delete_all(dest)
                    .with_context(|| format!("empty existing destination '{}'", dest.display()))?;
            }
        }
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("create destination directory '{}'", dest.display()))?;

    // Direct children only; recursion happens through transfer_dir itself so
    // each level re-applies the conflict policy and kind dispatch.
    for child in list_entries(src, false)? {
        let Some(child_path) = child.path() else {
            continue;
        };
        let Some(name) = child.file_name() else {
            continue;
        };
        let child_dest = dest.join(name);
        match child.kind() {
            EntryKind::File => transfer_file(child_path, &child_dest, mode, policy, opts)?,
            EntryKind::Directory => transfer_dir(child_path, &child_dest, mode, policy, opts)?,
            // Vanished between enumeration and dispatch; skip, as the walk is
            // a snapshot with no isolation guarantee.
            EntryKind::Absent => continue,
        }
    }

    if mode == TransferMode::Move {
        fs::remove_dir_all(src)
            .with_context(|| format!("remove source directory '{}' after move", src.display()))?;
        info!(src = %src.display(), dest = %dest.display(), "directory moved");
    } else {
        info!(src = %src.display(), dest = %dest.display(), "directory copied");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_check_is_textual() {
        assert!(dest_inside_src(Path::new("/a/b"), Path::new("/a/b/c")));
        assert!(dest_inside_src(Path::new("/a/b"), Path::new("/a/b")));
        assert!(!dest_inside_src(Path::new("/a/b"), Path::new("/a/bc")));
        assert!(!dest_inside_src(Path::new("/a/b/c"), Path::new("/a/b")));
    }
}
