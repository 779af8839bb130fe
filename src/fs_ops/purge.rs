//! Filtered recursive deletion of directory contents.
//!
//! The filter gates only the top-level decision per direct child: a matched
//! directory is removed in full, descendants included, without re-consulting
//! the filter for them. First deletion failure aborts the purge; siblings not
//! yet processed are left untouched.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::TreeOpsError;
use crate::path_ref::{EntryKind, PathRef};
use crate::walker::list_entries;

/// Delete every direct child of `dir` for which `filter` holds.
///
/// A missing (or blank) `dir` is a vacuous success; an existing non-directory
/// is an error. `dir` itself is never removed.
pub fn delete_matching(dir: impl AsRef<Path>, filter: impl Fn(&PathRef) -> bool) -> Result<()> {
    let root = PathRef::new(dir.as_ref());
    if !root.exists() {
        debug!(dir = %root, "purge target does not exist; nothing to do");
        return Ok(());
    }
    let Some(root_path) = root.path() else {
        return Ok(());
    };
    if !root.is_dir() {
        bail!(TreeOpsError::NotADirectory(root_path.to_path_buf()));
    }

    let mut removed = 0usize;
    for child in list_entries(root_path, false)? {
        if !filter(&child) {
            continue;
        }
        let Some(p) = child.path().map(Path::to_path_buf) else {
            continue;
        };
        match child.kind() {
            EntryKind::Directory => {
                fs::remove_dir_all(&p)
                    .with_context(|| format!("remove directory tree '{}'", p.display()))?;
            }
            EntryKind::File => {
                fs::remove_file(&p).with_context(|| format!("remove file '{}'", p.display()))?;
            }
            // Gone between enumeration and deletion; already what we wanted.
            EntryKind::Absent => continue,
        }
        removed += 1;
    }

    info!(dir = %root_path.display(), removed, "purge complete");
    Ok(())
}

/// Delete everything inside `dir`, leaving `dir` itself in place.
pub fn delete_all(dir: impl AsRef<Path>) -> Result<()> {
    delete_matching(dir, |_| true)
}

/// Delete only the files directly inside `dir`; subdirectories and their
/// contents are left intact.
pub fn delete_files_only(dir: impl AsRef<Path>) -> Result<()> {
    delete_matching(dir, PathRef::is_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn delete_all_on_missing_dir_is_noop_success() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.path().join("not-here");
        assert!(delete_all(&missing).is_ok());
    }

    #[test]
    fn delete_all_on_file_is_error() {
        let dir = assert_fs::TempDir::new().unwrap();
        let f = dir.child("f.txt");
        f.touch().unwrap();
        let err = delete_all(f.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TreeOpsError>(),
            Some(TreeOpsError::NotADirectory(_))
        ));
        assert!(f.path().exists());
    }

    #[test]
    fn delete_all_empties_but_keeps_root() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("sub/deep/x.txt").write_str("x").unwrap();

        delete_all(dir.path()).unwrap();
        assert!(dir.path().exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn delete_files_only_keeps_subdirs() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("sub/inner.txt").write_str("i").unwrap();

        delete_files_only(dir.path()).unwrap();
        assert!(!dir.path().join("a.txt").exists());
        assert!(dir.path().join("sub/inner.txt").exists());
    }

    #[test]
    fn filter_gates_top_level_only() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("sub/keep.txt").write_str("k").unwrap();
        dir.child("adir/nested.txt").write_str("n").unwrap();

        // Matched directory goes in full even though "nested.txt" wouldn't match.
        delete_matching(dir.path(), |e| {
            e.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('a'))
        })
        .unwrap();

        assert!(!dir.path().join("a.txt").exists());
        assert!(!dir.path().join("adir").exists());
        assert!(dir.path().join("b.txt").exists());
        assert!(dir.path().join("sub/keep.txt").exists());
    }
}
