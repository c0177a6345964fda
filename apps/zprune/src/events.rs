//! Event handling and line output

use crate::logging::log_event_with_tracing;
use console::{style, Term};
use std::path::Path;
use zprune_events::{AppEvent, GeneralEvent, ScanEvent};
use zprune_types::PruneMode;

/// Turns scan events into the line-oriented text output
///
/// stdout carries one `REMOVE {dir} {file}` line per flagged file and one
/// `deleted files in {dir}` line per processed directory. Warnings and the
/// closing summary go to stderr.
pub struct EventHandler {
    /// JSON mode: the report is printed at the end, no lines
    json_output: bool,
    stdout: Term,
    stderr: Term,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(json_output: bool) -> Self {
        Self {
            json_output,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        log_event_with_tracing(&event);

        if self.json_output {
            return;
        }

        match event {
            AppEvent::Scan(ScanEvent::EntryFlagged {
                directory,
                file_name,
            }) => {
                self.show_line(&remove_line(&directory, &file_name));
            }
            AppEvent::Scan(ScanEvent::DirectoryCompleted { directory, .. }) => {
                self.show_line(&completed_line(&directory));
            }
            AppEvent::Scan(ScanEvent::DirectorySkipped { directory, reason }) => {
                self.show_warning(&format!(
                    "skipped {}: {reason}",
                    directory.display()
                ));
            }
            AppEvent::Scan(ScanEvent::RemovalFailed {
                directory,
                file_name,
                message,
            }) => {
                self.show_warning(&format!(
                    "could not remove {}: {message}",
                    directory.join(file_name).display()
                ));
            }
            AppEvent::Scan(ScanEvent::Completed {
                mode,
                flagged,
                removed,
                failures,
            }) => {
                self.show_summary(mode, flagged, removed, failures);
            }
            AppEvent::General(GeneralEvent::Warning { message, context }) => {
                self.show_warning(&format!("{message} ({context})"));
            }
            _ => {}
        }
    }

    fn show_line(&self, line: &str) {
        let _ = self.stdout.write_line(line);
    }

    fn show_warning(&self, message: &str) {
        let _ = self
            .stderr
            .write_line(&format!("{} {message}", style("Warning:").yellow().bold()));
    }

    fn show_summary(&self, mode: PruneMode, flagged: usize, removed: usize, failures: usize) {
        let summary = match mode {
            PruneMode::DryRun if flagged > 0 => format!(
                "Dry run: {flagged} file(s) outside the retained region, nothing deleted. \
                 Run `zprune prune --yes` to delete them."
            ),
            PruneMode::DryRun => "Dry run: nothing outside the retained region.".to_string(),
            PruneMode::Execute if failures > 0 => {
                format!("Deleted {removed} of {flagged} file(s); {failures} could not be removed.")
            }
            PruneMode::Execute => format!("Deleted {removed} file(s)."),
        };
        let _ = self.stderr.write_line(&style(summary).dim().to_string());
    }
}

/// Notice for a file outside the retained region
pub fn remove_line(directory: &Path, file_name: &str) -> String {
    format!("REMOVE {} {file_name}", directory.display())
}

/// Notice printed after every processed directory
pub fn completed_line(directory: &Path) -> String {
    format!("deleted files in {}", directory.display())
}
