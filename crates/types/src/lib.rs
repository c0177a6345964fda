#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for zprune
//!
//! Regions, retention decisions, run modes and the reports produced by a
//! pruning pass.

pub mod region;
pub mod reports;

pub use region::{Region, DEFAULT_CHUNK_SIZE};
pub use reports::{DirectoryReport, DirectoryStatus, PruneReport, RemovalFailure};

use serde::{Deserialize, Serialize};

/// Outcome of classifying a single save file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Keep,
    Remove,
}

impl Decision {
    #[must_use]
    pub fn is_remove(self) -> bool {
        matches!(self, Self::Remove)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Why an entry survived the retention filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepReason {
    /// Coordinates fall inside the category's region
    InRegion,
    /// Leading token is not a configured category
    UnknownCategory,
    /// Known category, but not `<category>_<x>_<y>` with integer coordinates
    Malformed,
    /// Entry is a directory
    NotAFile,
}

impl std::fmt::Display for KeepReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InRegion => write!(f, "inside retained region"),
            Self::UnknownCategory => write!(f, "unknown category"),
            Self::Malformed => write!(f, "filename does not match <category>_<x>_<y>"),
            Self::NotAFile => write!(f, "not a regular file"),
        }
    }
}

/// Whether flagged files are only reported or actually deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PruneMode {
    /// Report removal candidates, touch nothing
    DryRun,
    /// Delete removal candidates
    Execute,
}

impl PruneMode {
    #[must_use]
    pub fn is_dry_run(self) -> bool {
        matches!(self, Self::DryRun)
    }
}

impl Default for PruneMode {
    fn default() -> Self {
        Self::DryRun
    }
}

impl std::fmt::Display for PruneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DryRun => write!(f, "dry-run"),
            Self::Execute => write!(f, "execute"),
        }
    }
}

impl std::str::FromStr for PruneMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dry-run" | "dryrun" => Ok(Self::DryRun),
            "execute" => Ok(Self::Execute),
            other => Err(format!("unknown prune mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_mode_defaults_to_dry_run() {
        assert!(PruneMode::default().is_dry_run());
    }

    #[test]
    fn prune_mode_parses_config_spelling() {
        assert_eq!("dry-run".parse::<PruneMode>(), Ok(PruneMode::DryRun));
        assert_eq!("execute".parse::<PruneMode>(), Ok(PruneMode::Execute));
        assert!("delete".parse::<PruneMode>().is_err());
    }

    #[test]
    fn prune_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&PruneMode::DryRun).unwrap();
        assert_eq!(json, r#""dry-run""#);
    }
}
