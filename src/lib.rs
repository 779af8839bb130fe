//! Core library for `treeops`.
//!
//! Recursive copy/move/purge operations over directory trees. Name collisions
//! at the destination are resolved by a caller-supplied [`ConflictPolicy`];
//! I/O chunking and durability are configured per call via
//! [`TransferOptions`] rather than any process-wide knob.
//!
//! The engine is synchronous, single-threaded and blocking. It provides no
//! isolation against concurrent external modification of the paths it works
//! on, and a failure mid-tree leaves already-transferred children in place.

pub mod cli;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod path_ref;
pub mod walker;

pub use errors::TreeOpsError;
pub use fs_ops::{
    ConflictDecision, ConflictPolicy, DurabilityMode, TransferMode, keep_existing, replace_existing,
    TransferOptions, copy_dir, copy_dir_with, copy_file, copy_file_with, create_or_exists_dir,
    create_or_exists_file, delete_all, delete_files_only, delete_matching, move_dir,
    move_dir_with, move_file, move_file_with, rename_entry,
};
pub use path_ref::{EntryKind, PathRef};
pub use walker::{list_entries, list_matching};
