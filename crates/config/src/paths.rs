//! Save directory layout

use crate::constants::{ISO_REGION_DIR, PLAYER_DIR_SUFFIX};
use std::path::{Path, PathBuf};
use zprune_errors::ConfigError;

/// The three directories a world save is spread over
///
/// For a root `Saves/Multiplayer/World` these are the root itself,
/// `Saves/Multiplayer/World/isoregiondata` and the sibling
/// `Saves/Multiplayer/World_player`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePaths {
    pub root: PathBuf,
    pub iso_region: PathBuf,
    pub player: PathBuf,
}

impl SavePaths {
    /// Derive the save directories from the world root
    ///
    /// # Errors
    ///
    /// Returns an error if the root has no final path component (`.`, `..`
    /// or `/`).
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let mut dir_name = root
            .file_name()
            .ok_or_else(|| ConfigError::InvalidSaveRoot {
                path: root.display().to_string(),
            })?
            .to_os_string();
        dir_name.push(PLAYER_DIR_SUFFIX);
        let player = root.with_file_name(&dir_name);
        let iso_region = root.join(ISO_REGION_DIR);

        Ok(Self {
            root,
            iso_region,
            player,
        })
    }

    /// Directories to scan, in processing order
    #[must_use]
    pub fn targets(&self) -> Vec<PathBuf> {
        vec![
            self.root.clone(),
            self.iso_region.clone(),
            self.player.clone(),
        ]
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
