//! Tree enumeration.
//!
//! Lists the direct children of a directory, or the whole subtree depth-first
//! in pre-order (a directory is reported before its descendants). The result
//! reflects filesystem state at enumeration time; concurrent modification
//! during a walk has undefined ordering effects.

use anyhow::{Result, bail};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::TreeOpsError;
use crate::path_ref::PathRef;

/// List entries under `dir`.
///
/// Non-recursive: the direct children only. Recursive: the full subtree in
/// depth-first pre-order. `dir` itself is never part of the result.
///
/// Errors when `dir` is blank or not a directory; callers must be able to
/// distinguish "not a directory" from "empty directory".
pub fn list_entries(dir: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathRef>> {
    list_matching(dir, |_| true, recursive)
}

/// List entries under `dir` for which `filter` holds.
///
/// The filter selects which entries are *reported*; it does not prune the
/// walk. A subdirectory the filter rejects is still descended into when
/// `recursive` is set.
pub fn list_matching(
    dir: impl AsRef<Path>,
    filter: impl Fn(&PathRef) -> bool,
    recursive: bool,
) -> Result<Vec<PathRef>> {
    let dir = dir.as_ref();
    let root = PathRef::new(dir);
    let Some(root_path) = root.path() else {
        bail!(TreeOpsError::BlankPath);
    };
    if !root.is_dir() {
        bail!(TreeOpsError::NotADirectory(root_path.to_path_buf()));
    }

    let mut walk = WalkDir::new(root_path).min_depth(1);
    if !recursive {
        walk = walk.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in walk {
        let entry = entry?;
        let r = PathRef::new(entry.path());
        if filter(&r) {
            out.push(r);
        }
    }
    debug!(dir = %root_path.display(), recursive, count = out.len(), "listed entries");
    Ok(out)
}
