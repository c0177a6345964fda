//! Report type definitions for pruning passes

use crate::PruneMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a directory was actually scanned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryStatus {
    Scanned,
    /// Missing directory passed over because `skip_missing` is set
    Skipped,
}

/// A flagged file that could not be deleted
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalFailure {
    pub file_name: String,
    pub message: String,
}

/// Result of scanning one save directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub directory: PathBuf,
    pub status: DirectoryStatus,
    /// Entries looked at, directories included
    pub scanned: usize,
    pub kept: usize,
    /// Files outside the retained region, in listing order
    pub flagged: Vec<String>,
    /// Flagged files actually deleted (always empty on a dry run)
    pub removed: Vec<String>,
    pub failures: Vec<RemovalFailure>,
}

impl DirectoryReport {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            status: DirectoryStatus::Scanned,
            scanned: 0,
            kept: 0,
            flagged: Vec::new(),
            removed: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn skipped(directory: impl Into<PathBuf>) -> Self {
        Self {
            status: DirectoryStatus::Skipped,
            ..Self::new(directory)
        }
    }
}

/// Result of a full pruning pass over every target directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    pub mode: PruneMode,
    pub directories: Vec<DirectoryReport>,
}

impl PruneReport {
    #[must_use]
    pub fn new(mode: PruneMode) -> Self {
        Self {
            mode,
            directories: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_flagged(&self) -> usize {
        self.directories.iter().map(|d| d.flagged.len()).sum()
    }

    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.directories.iter().map(|d| d.removed.len()).sum()
    }

    #[must_use]
    pub fn total_failures(&self) -> usize {
        self.directories.iter().map(|d| d.failures.len()).sum()
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_over_directories() {
        let mut first = DirectoryReport::new("Saves/a");
        first.flagged = vec!["map_1_1.bin".into(), "map_2_2.bin".into()];
        first.removed = vec!["map_1_1.bin".into()];
        first.failures.push(RemovalFailure {
            file_name: "map_2_2.bin".into(),
            message: "permission denied".into(),
        });
        let mut second = DirectoryReport::new("Saves/b");
        second.flagged = vec!["zpop_0_0.bin".into()];
        second.removed = vec!["zpop_0_0.bin".into()];

        let report = PruneReport {
            mode: PruneMode::Execute,
            directories: vec![first, second],
        };
        assert_eq!(report.total_flagged(), 3);
        assert_eq!(report.total_removed(), 2);
        assert_eq!(report.total_failures(), 1);
    }

    #[test]
    fn json_report_carries_mode_and_status() {
        let mut report = PruneReport::new(PruneMode::DryRun);
        report.directories.push(DirectoryReport::skipped("Saves/gone"));
        let json = report.to_json().unwrap();
        assert!(json.contains(r#""mode": "dry-run""#));
        assert!(json.contains(r#""status": "skipped""#));
    }
}
