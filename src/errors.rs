//! Typed error definitions for treeops.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeOpsError {
    #[error("Invalid path: blank or empty")]
    BlankPath,

    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Source and destination are the same path: {0}")]
    SamePath(PathBuf),

    #[error("Destination {dest} lies inside source {src}; refusing recursive self-copy")]
    DestinationInsideSource { src: PathBuf, dest: PathBuf },
}
