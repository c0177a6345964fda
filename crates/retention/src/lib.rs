#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Retention filtering for world save directories
//!
//! Save files are named `<category>_<x>_<y>.<ext>`. Each category maps to a
//! retained [`Region`](zprune_types::Region); files of a known category whose
//! coordinates fall outside it are flagged, and deleted when the pass runs in
//! execute mode. Every other entry is left alone.

pub mod filename;
pub mod filter;
pub mod fs;
pub mod scan;

pub use filename::{ParsedFilename, Unmatched};
pub use filter::{classify, RetentionRules, Verdict};
pub use fs::{DirEntry, EntryKind, SaveFs, StdFs};
pub use scan::{Pruner, ScanOptions};
