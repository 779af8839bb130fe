//! Application orchestrator.
//! Initializes logging, builds the conflict policy and transfer options from
//! flags, dispatches on source kind, and invokes the library operation.

use anyhow::{Result, bail};
use std::path::Path;
use tracing::debug;

use treeops::cli::{self, Args, Command};
use treeops::output as out;
use treeops::{
    ConflictDecision, EntryKind, PathRef, TransferOptions, TreeOpsError, copy_dir_with,
    copy_file_with, delete_all, delete_files_only, list_entries, move_dir_with, move_file_with,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let _guard = init_tracing(args.effective_log_level(), args.log_file.as_deref(), args.json)?;
    debug!(command = ?args.command, "dispatch");

    match &args.command {
        Command::Copy {
            source,
            dest,
            overwrite,
            buffer_size,
            fsync,
        } => {
            let opts = cli::transfer_options(*buffer_size, *fsync);
            transfer(source, dest, *overwrite, &opts, false)?;
            out::print_success(&format!("Copied {} -> {}", source.display(), dest.display()));
        }
        Command::MoveCmd {
            source,
            dest,
            overwrite,
            buffer_size,
            fsync,
        } => {
            let opts = cli::transfer_options(*buffer_size, *fsync);
            transfer(source, dest, *overwrite, &opts, true)?;
            out::print_success(&format!("Moved {} -> {}", source.display(), dest.display()));
        }
        Command::Purge { dir, files_only } => {
            if *files_only {
                delete_files_only(dir)?;
            } else {
                delete_all(dir)?;
            }
            out::print_success(&format!("Purged {}", dir.display()));
        }
        Command::List { dir, recursive } => {
            for entry in list_entries(dir, *recursive)? {
                if let Some(p) = entry.path() {
                    out::print_user(&p.display().to_string());
                }
            }
        }
    }
    Ok(())
}

/// Dispatch a transfer on the source's kind, with the policy chosen by the
/// --overwrite flag.
fn transfer(
    source: &Path,
    dest: &Path,
    overwrite: bool,
    opts: &TransferOptions,
    is_move: bool,
) -> Result<()> {
    let decision = if overwrite {
        ConflictDecision::Replace
    } else {
        ConflictDecision::Keep
    };
    let policy = move |_: &Path| decision;

    match PathRef::new(source).kind() {
        EntryKind::File if is_move => move_file_with(source, dest, policy, opts),
        EntryKind::File => copy_file_with(source, dest, policy, opts),
        EntryKind::Directory if is_move => move_dir_with(source, dest, policy, opts),
        EntryKind::Directory => copy_dir_with(source, dest, policy, opts),
        EntryKind::Absent => bail!(TreeOpsError::SourceNotFound(source.to_path_buf())),
    }
}
