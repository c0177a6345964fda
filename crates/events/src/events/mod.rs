use serde::{Deserialize, Serialize};

pub mod general;
pub mod scan;

pub use general::GeneralEvent;
pub use scan::ScanEvent;

/// Top-level event, grouped by domain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// Warnings not tied to a scan stage
    General(GeneralEvent),

    /// Save directory scanning and pruning
    Scan(ScanEvent),
}
