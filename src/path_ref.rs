//! Resolved path references.
//!
//! `PathRef` wraps a path string and answers existence/kind queries against
//! live filesystem state. Queries are never cached: the filesystem can change
//! between calls, so the engine re-checks rather than assumes.
//!
//! A blank path (empty or whitespace-only) resolves to an *absent* reference
//! instead of an error; every query on it answers "no".

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What a path points at right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Nothing exists at the path, or the reference itself is blank.
    Absent,
}

/// A validated reference to a filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRef {
    path: Option<PathBuf>,
}

impl PathRef {
    /// Build a reference from any path-like value. A blank (empty or
    /// whitespace-only) path yields an absent reference, not an error.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        if p.as_os_str().is_empty() || p.to_string_lossy().trim().is_empty() {
            return Self { path: None };
        }
        Self {
            path: Some(p.to_path_buf()),
        }
    }

    /// The underlying path, or `None` for a blank reference.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Live existence query.
    pub fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::exists)
    }

    /// Live query: does the path exist and point at a regular file?
    pub fn is_file(&self) -> bool {
        self.path.as_deref().is_some_and(Path::is_file)
    }

    /// Live query: does the path exist and point at a directory?
    pub fn is_dir(&self) -> bool {
        self.path.as_deref().is_some_and(Path::is_dir)
    }

    /// Classify the entry at this moment. Symlinks are followed, matching
    /// `fs::metadata`; a dangling link classifies as `Absent`.
    pub fn kind(&self) -> EntryKind {
        let Some(p) = self.path.as_deref() else {
            return EntryKind::Absent;
        };
        match fs::metadata(p) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            _ => EntryKind::Absent,
        }
    }

    /// Final component of the path, if any.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.as_deref().and_then(Path::file_name)
    }
}

impl fmt::Display for PathRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "{}", p.display()),
            None => write!(f, "<blank>"),
        }
    }
}

impl From<PathBuf> for PathRef {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for PathRef {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
