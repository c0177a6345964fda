//! Filesystem access for the pruner
//!
//! Listing a directory and removing a file are the only I/O the pruner
//! performs. Both go through [`SaveFs`] so scans can run against an
//! in-memory tree in tests.

use std::ffi::OsString;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets and anything else that is not a plain file
    Other,
}

/// A direct child of a save directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    #[must_use]
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Filesystem operations needed by a pruning pass
pub trait SaveFs {
    /// List the direct entries of `dir`, not recursing
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be read.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Remove the file at `path`
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`SaveFs`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl SaveFs for StdFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry {
                name: entry.file_name(),
                kind,
            });
        }
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}
