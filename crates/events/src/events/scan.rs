use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zprune_types::{KeepReason, PruneMode};

/// Events emitted while walking the save directories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScanEvent {
    /// Pruning pass is starting
    Started {
        mode: PruneMode,
        directories: usize,
    },

    /// Listing a save directory
    DirectoryStarted { directory: PathBuf },

    /// Missing directory passed over
    DirectorySkipped { directory: PathBuf, reason: String },

    /// Entry survived the retention filter
    EntryKept {
        directory: PathBuf,
        file_name: String,
        reason: KeepReason,
    },

    /// Entry lies outside the retained region
    EntryFlagged {
        directory: PathBuf,
        file_name: String,
    },

    /// Flagged entry deleted
    EntryRemoved {
        directory: PathBuf,
        file_name: String,
    },

    /// Flagged entry could not be deleted
    RemovalFailed {
        directory: PathBuf,
        file_name: String,
        message: String,
    },

    /// Every entry of the directory has been processed
    DirectoryCompleted {
        directory: PathBuf,
        flagged: usize,
        removed: usize,
    },

    /// Pruning pass finished
    Completed {
        mode: PruneMode,
        flagged: usize,
        removed: usize,
        failures: usize,
    },
}
