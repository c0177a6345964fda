//! Save directory scanning error types

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("save directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("cannot read save directory {}: {message}", path.display())]
    DirectoryUnreadable { path: PathBuf, message: String },
}

impl ScanError {
    /// Classify a directory listing failure
    #[must_use]
    pub fn from_listing(err: &std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::DirectoryNotFound {
                path: path.to_path_buf(),
            },
            _ => Self::DirectoryUnreadable {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        }
    }
}

impl UserFacingError for ScanError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::DirectoryNotFound { .. } => Some(
                "Check save_root, or pass --skip-missing to continue past missing directories.",
            ),
            Self::DirectoryUnreadable { .. } => {
                Some("Check permissions on the save directory and retry.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::DirectoryNotFound { .. } => "scan.directory_not_found",
            Self::DirectoryUnreadable { .. } => "scan.directory_unreadable",
        };
        Some(code)
    }
}
