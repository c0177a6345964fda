//! Pruning pass over the save directories
//!
//! Each directory is listed once, every entry is classified, and flagged
//! files are reported. Files are only deleted in [`PruneMode::Execute`].

use crate::filter::{RetentionRules, Verdict};
use crate::fs::{DirEntry, EntryKind, SaveFs};
use std::path::{Path, PathBuf};
use tracing::debug;
use zprune_errors::{Error, ScanError};
use zprune_events::{AppEvent, EventEmitter, EventSender, ScanEvent};
use zprune_types::{DirectoryReport, KeepReason, PruneMode, PruneReport, RemovalFailure};

/// Knobs for a pruning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub mode: PruneMode,
    /// Pass over missing directories instead of failing the run
    pub skip_missing: bool,
}

/// Applies [`RetentionRules`] to save directories
pub struct Pruner<F: SaveFs> {
    rules: RetentionRules,
    fs: F,
    options: ScanOptions,
    tx: Option<EventSender>,
}

impl<F: SaveFs> EventEmitter for Pruner<F> {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }
}

impl<F: SaveFs> Pruner<F> {
    #[must_use]
    pub fn new(rules: RetentionRules, fs: F, options: ScanOptions) -> Self {
        Self {
            rules,
            fs,
            options,
            tx: None,
        }
    }

    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &RetentionRules {
        &self.rules
    }

    #[must_use]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Scan every target in order
    ///
    /// # Errors
    ///
    /// Returns an error on the first directory that cannot be listed. A
    /// missing directory is skipped instead when `skip_missing` is set.
    /// Failed removals never abort the pass; they are recorded in the report.
    pub fn run(&self, targets: &[PathBuf]) -> Result<PruneReport, Error> {
        self.emit(AppEvent::Scan(ScanEvent::Started {
            mode: self.options.mode,
            directories: targets.len(),
        }));

        let mut report = PruneReport::new(self.options.mode);
        for dir in targets {
            match self.scan_directory(dir) {
                Ok(dir_report) => report.directories.push(dir_report),
                Err(ScanError::DirectoryNotFound { path }) if self.options.skip_missing => {
                    self.emit(AppEvent::Scan(ScanEvent::DirectorySkipped {
                        directory: path.clone(),
                        reason: "directory not found".to_string(),
                    }));
                    report.directories.push(DirectoryReport::skipped(path));
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.emit(AppEvent::Scan(ScanEvent::Completed {
            mode: self.options.mode,
            flagged: report.total_flagged(),
            removed: report.total_removed(),
            failures: report.total_failures(),
        }));
        Ok(report)
    }

    /// Classify every direct entry of `dir` and act on the flagged ones
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn scan_directory(&self, dir: &Path) -> Result<DirectoryReport, ScanError> {
        let mut entries = self
            .fs
            .list_entries(dir)
            .map_err(|e| ScanError::from_listing(&e, dir))?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        self.emit(AppEvent::Scan(ScanEvent::DirectoryStarted {
            directory: dir.to_path_buf(),
        }));

        let mut report = DirectoryReport::new(dir);
        for entry in &entries {
            report.scanned += 1;
            let file_name = entry.name.to_string_lossy().into_owned();

            match self.evaluate_entry(dir, entry) {
                Verdict::Keep(reason) => {
                    report.kept += 1;
                    self.emit(AppEvent::Scan(ScanEvent::EntryKept {
                        directory: dir.to_path_buf(),
                        file_name,
                        reason,
                    }));
                }
                Verdict::Remove { x, y } => {
                    debug!(directory = %dir.display(), %file_name, x, y, "outside retained region");
                    self.emit(AppEvent::Scan(ScanEvent::EntryFlagged {
                        directory: dir.to_path_buf(),
                        file_name: file_name.clone(),
                    }));
                    report.flagged.push(file_name.clone());

                    if self.options.mode == PruneMode::Execute {
                        self.remove(dir, entry, file_name, &mut report);
                    }
                }
            }
        }

        self.emit(AppEvent::Scan(ScanEvent::DirectoryCompleted {
            directory: dir.to_path_buf(),
            flagged: report.flagged.len(),
            removed: report.removed.len(),
        }));
        Ok(report)
    }

    fn evaluate_entry(&self, dir: &Path, entry: &DirEntry) -> Verdict {
        if entry.kind != EntryKind::File {
            return Verdict::Keep(KeepReason::NotAFile);
        }
        match entry.name.to_str() {
            Some(name) => self.rules.evaluate(name),
            None => {
                self.emit_warning_with_context(
                    "file name is not valid UTF-8, keeping it",
                    dir.join(&entry.name).display().to_string(),
                );
                Verdict::Keep(KeepReason::Malformed)
            }
        }
    }

    fn remove(
        &self,
        dir: &Path,
        entry: &DirEntry,
        file_name: String,
        report: &mut DirectoryReport,
    ) {
        let path = dir.join(&entry.name);
        match self.fs.remove_file(&path) {
            Ok(()) => {
                self.emit(AppEvent::Scan(ScanEvent::EntryRemoved {
                    directory: dir.to_path_buf(),
                    file_name: file_name.clone(),
                }));
                report.removed.push(file_name);
            }
            Err(e) => {
                let message = e.to_string();
                self.emit(AppEvent::Scan(ScanEvent::RemovalFailed {
                    directory: dir.to_path_buf(),
                    file_name: file_name.clone(),
                    message: message.clone(),
                }));
                report.failures.push(RemovalFailure { file_name, message });
            }
        }
    }
}
