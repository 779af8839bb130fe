//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Transfer tuning flags (--buffer-size, --fsync) map onto TransferOptions.

use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::fs_ops::{DurabilityMode, TransferOptions};

/// Verbosity levels, mapped onto tracing level filters by the logging setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Quiet,
    Normal,
    Info,
    Debug,
}

/// CLI wrapper for the treeops library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy, move and purge directory trees with explicit conflict handling"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file (non-blocking appender).
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help = "Write logs to this file in addition to stdout")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy a file or directory tree to a destination path.
    Copy {
        #[arg(value_hint = ValueHint::AnyPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dest: PathBuf,
        /// Replace an existing destination instead of keeping it.
        #[arg(long, help = "Overwrite an existing destination")]
        overwrite: bool,
        /// I/O chunk size in bytes for file content copies.
        #[arg(long, value_name = "BYTES", help = "I/O buffer size in bytes")]
        buffer_size: Option<usize>,
        /// Fsync each copied file before reporting success.
        #[arg(long, help = "Force copied data to stable storage (slower)")]
        fsync: bool,
    },
    /// Move a file or directory tree; the source is removed on success.
    #[command(name = "move")]
    MoveCmd {
        #[arg(value_hint = ValueHint::AnyPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dest: PathBuf,
        #[arg(long, help = "Overwrite an existing destination")]
        overwrite: bool,
        #[arg(long, value_name = "BYTES", help = "I/O buffer size in bytes")]
        buffer_size: Option<usize>,
        #[arg(long, help = "Force copied data to stable storage (slower)")]
        fsync: bool,
    },
    /// Delete the contents of a directory, leaving the directory in place.
    Purge {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
        /// Delete only direct-child files; keep subdirectories and their contents.
        #[arg(long, help = "Delete only files, keep subdirectories intact")]
        files_only: bool,
    },
    /// List directory entries.
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
        /// Descend into subdirectories (depth-first, parents first).
        #[arg(short, long, help = "Recurse into subdirectories")]
        recursive: bool,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.unwrap_or(LogLevel::Normal)
    }
}

/// Build TransferOptions from the tuning flags of a transfer subcommand.
pub fn transfer_options(buffer_size: Option<usize>, fsync: bool) -> TransferOptions {
    let mut opts = TransferOptions::default();
    if let Some(size) = buffer_size {
        opts.buffer_size = size.max(1);
    }
    if fsync {
        opts.durability = DurabilityMode::Full;
    }
    opts
}

pub fn parse() -> Args {
    Args::parse()
}
