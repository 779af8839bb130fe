//! Filesystem tree operations: modularized.
//!
//! The wrappers here are the stable surface; `transfer` and `purge` hold the
//! recursive engines. Every operation is synchronous and blocking, runs to
//! completion or to the first unrecoverable error, and takes its conflict
//! policy and transfer options per call.

mod io_copy;
mod purge;
mod transfer;

pub use io_copy::{DurabilityMode, TransferOptions};
pub use purge::{delete_all, delete_files_only, delete_matching};
pub use transfer::{ConflictDecision, ConflictPolicy, TransferMode, keep_existing, replace_existing};

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::TreeOpsError;
use crate::path_ref::PathRef;

/// Copy a single file, with default transfer options.
pub fn copy_file(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    policy: impl ConflictPolicy,
) -> Result<()> {
    copy_file_with(src, dest, policy, &TransferOptions::default())
}

/// Copy a single file with explicit transfer options.
pub fn copy_file_with(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    mut policy: impl ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    transfer::transfer_file(
        src.as_ref(),
        dest.as_ref(),
        TransferMode::Copy,
        &mut policy,
        opts,
    )
}

/// Move a single file. The source is removed only after its content has been
/// fully written to the destination.
pub fn move_file(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    policy: impl ConflictPolicy,
) -> Result<()> {
    move_file_with(src, dest, policy, &TransferOptions::default())
}

/// Move a single file with explicit transfer options.
pub fn move_file_with(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    mut policy: impl ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    transfer::transfer_file(
        src.as_ref(),
        dest.as_ref(),
        TransferMode::Move,
        &mut policy,
        opts,
    )
}

/// Copy a directory tree, with default transfer options.
pub fn copy_dir(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    policy: impl ConflictPolicy,
) -> Result<()> {
    copy_dir_with(src, dest, policy, &TransferOptions::default())
}

/// Copy a directory tree with explicit transfer options.
pub fn copy_dir_with(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    mut policy: impl ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    transfer::transfer_dir(
        src.as_ref(),
        dest.as_ref(),
        TransferMode::Copy,
        &mut policy,
        opts,
    )
}

/// Move a directory tree; the source tree is removed after all children
/// transferred successfully.
pub fn move_dir(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    policy: impl ConflictPolicy,
) -> Result<()> {
    move_dir_with(src, dest, policy, &TransferOptions::default())
}

/// Move a directory tree with explicit transfer options.
pub fn move_dir_with(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    mut policy: impl ConflictPolicy,
    opts: &TransferOptions,
) -> Result<()> {
    transfer::transfer_dir(
        src.as_ref(),
        dest.as_ref(),
        TransferMode::Move,
        &mut policy,
        opts,
    )
}

/// Rename an entry within its parent directory.
///
/// Renaming to the current name is a no-op success. Blank names, missing
/// sources and existing targets are errors.
pub fn rename_entry(path: impl AsRef<Path>, new_name: &str) -> Result<PathBuf> {
    let src = PathRef::new(path.as_ref());
    let Some(src_path) = src.path() else {
        bail!(TreeOpsError::BlankPath);
    };
    if new_name.trim().is_empty() {
        bail!(TreeOpsError::BlankPath);
    }
    if !src.exists() {
        bail!(TreeOpsError::SourceNotFound(src_path.to_path_buf()));
    }
    if src.file_name().is_some_and(|n| n == new_name) {
        return Ok(src_path.to_path_buf());
    }

    let target = src_path.with_file_name(new_name);
    if target.exists() {
        bail!(
            "rename target already exists: '{}' -> '{}'",
            src_path.display(),
            target.display()
        );
    }
    fs::rename(src_path, &target)
        .with_context(|| format!("rename '{}' -> '{}'", src_path.display(), target.display()))?;
    info!(from = %src_path.display(), to = %target.display(), "renamed entry");
    Ok(target)
}

/// Ensure a directory exists at `path`, creating it (and missing parents) if
/// absent. Errors if the path exists as a non-directory.
pub fn create_or_exists_dir(path: impl AsRef<Path>) -> Result<()> {
    let r = PathRef::new(path.as_ref());
    let Some(p) = r.path() else {
        bail!(TreeOpsError::BlankPath);
    };
    if r.exists() {
        if r.is_dir() {
            return Ok(());
        }
        bail!(TreeOpsError::NotADirectory(p.to_path_buf()));
    }
    fs::create_dir_all(p).with_context(|| format!("create directory '{}'", p.display()))
}

/// Ensure a regular file exists at `path`, creating it (and missing parent
/// directories) if absent. Errors if the path exists as a directory.
pub fn create_or_exists_file(path: impl AsRef<Path>) -> Result<()> {
    let r = PathRef::new(path.as_ref());
    let Some(p) = r.path() else {
        bail!(TreeOpsError::BlankPath);
    };
    if r.exists() {
        if r.is_file() {
            return Ok(());
        }
        bail!(TreeOpsError::NotAFile(p.to_path_buf()));
    }
    if let Some(parent) = p.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent directory '{}'", parent.display()))?;
    }
    fs::File::create_new(p)
        .map(drop)
        .with_context(|| format!("create file '{}'", p.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn rename_entry_basic() {
        let dir = assert_fs::TempDir::new().unwrap();
        let f = dir.child("old.txt");
        f.write_str("content").unwrap();

        let target = rename_entry(f.path(), "new.txt").unwrap();
        assert!(!f.path().exists());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "content");
        assert_eq!(target, dir.path().join("new.txt"));
    }

    #[test]
    fn rename_entry_same_name_is_noop() {
        let dir = assert_fs::TempDir::new().unwrap();
        let f = dir.child("same.txt");
        f.touch().unwrap();
        let target = rename_entry(f.path(), "same.txt").unwrap();
        assert_eq!(target, f.path());
        assert!(f.path().exists());
    }

    #[test]
    fn rename_entry_refuses_existing_target_and_blank_name() {
        let dir = assert_fs::TempDir::new().unwrap();
        let a = dir.child("a.txt");
        let b = dir.child("b.txt");
        a.touch().unwrap();
        b.touch().unwrap();

        assert!(rename_entry(a.path(), "b.txt").is_err());
        assert!(rename_entry(a.path(), "   ").is_err());
        assert!(a.path().exists());
    }

    #[test]
    fn create_or_exists_dir_idempotent() {
        let dir = assert_fs::TempDir::new().unwrap();
        let d = dir.path().join("x/y/z");
        create_or_exists_dir(&d).unwrap();
        create_or_exists_dir(&d).unwrap();
        assert!(d.is_dir());

        let f = dir.child("f.txt");
        f.touch().unwrap();
        assert!(create_or_exists_dir(f.path()).is_err());
    }

    #[test]
    fn create_or_exists_file_creates_parents() {
        let dir = assert_fs::TempDir::new().unwrap();
        let f = dir.path().join("nested/deeper/out.txt");
        create_or_exists_file(&f).unwrap();
        create_or_exists_file(&f).unwrap();
        assert!(f.is_file());

        assert!(create_or_exists_file(dir.path()).is_err());
    }
}
