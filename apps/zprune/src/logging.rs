//! Structured logging integration for events
//!
//! Converts scan events into tracing records with structured fields. The
//! user-facing text output is produced separately by the event handler.

use tracing::{debug, info, trace, warn};
use zprune_events::{AppEvent, GeneralEvent, ScanEvent};

/// Log an `AppEvent` using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(event: &AppEvent) {
    match event {
        AppEvent::General(GeneralEvent::Warning { message, context }) => {
            warn!(context = %context, "{message}");
        }

        AppEvent::Scan(scan) => match scan {
            ScanEvent::Started { mode, directories } => {
                info!(mode = %mode, directories = directories, "Pruning pass started");
            }
            ScanEvent::DirectoryStarted { directory } => {
                debug!(directory = %directory.display(), "Scanning directory");
            }
            ScanEvent::DirectorySkipped { directory, reason } => {
                warn!(directory = %directory.display(), reason = %reason, "Directory skipped");
            }
            ScanEvent::EntryKept {
                directory,
                file_name,
                reason,
            } => {
                trace!(
                    directory = %directory.display(),
                    file_name = %file_name,
                    reason = ?reason,
                    "Entry kept"
                );
            }
            ScanEvent::EntryFlagged {
                directory,
                file_name,
            } => {
                debug!(
                    directory = %directory.display(),
                    file_name = %file_name,
                    "Entry outside retained region"
                );
            }
            ScanEvent::EntryRemoved {
                directory,
                file_name,
            } => {
                info!(
                    directory = %directory.display(),
                    file_name = %file_name,
                    "Entry removed"
                );
            }
            ScanEvent::RemovalFailed {
                directory,
                file_name,
                message,
            } => {
                warn!(
                    directory = %directory.display(),
                    file_name = %file_name,
                    message = %message,
                    "Removal failed"
                );
            }
            ScanEvent::DirectoryCompleted {
                directory,
                flagged,
                removed,
            } => {
                debug!(
                    directory = %directory.display(),
                    flagged = flagged,
                    removed = removed,
                    "Directory completed"
                );
            }
            ScanEvent::Completed {
                mode,
                flagged,
                removed,
                failures,
            } => {
                info!(
                    mode = %mode,
                    flagged = flagged,
                    removed = removed,
                    failures = failures,
                    "Pruning pass completed"
                );
            }
        },
    }
}
