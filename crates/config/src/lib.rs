#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for zprune
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded, see [`constants`])
//! - Configuration file (~/.config/zprune/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

pub mod constants;
pub mod paths;

pub use paths::SavePaths;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use zprune_errors::{ConfigError, Error};
use zprune_types::{PruneMode, Region};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    /// Named regions; replaces the built-in table when present
    #[serde(default = "default_regions")]
    pub regions: BTreeMap<String, Region>,

    /// Category name to region name; replaces the built-in table when present
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, String>,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_save_root")]
    pub save_root: PathBuf,
    /// Explicit scan targets, used instead of the three derived from `save_root`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directories: Option<Vec<PathBuf>>,
}

/// Scan behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub skip_missing: bool,
    #[serde(default)]
    pub mode: PruneMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathConfig::default(),
            scan: ScanConfig::default(),
            regions: default_regions(),
            categories: default_categories(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            save_root: default_save_root(),
            directories: None,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_missing: false,
            mode: PruneMode::DryRun,
        }
    }
}

// Default value functions for serde
fn default_save_root() -> PathBuf {
    PathBuf::from(constants::DEFAULT_SAVE_ROOT)
}

fn default_regions() -> BTreeMap<String, Region> {
    BTreeMap::from([
        (
            constants::CELL_REGION.to_string(),
            Region::new(constants::CELL_X, constants::CELL_Y),
        ),
        (
            constants::CHUNK_REGION.to_string(),
            Region::new(constants::CHUNK_X, constants::CHUNK_Y),
        ),
    ])
}

fn default_categories() -> BTreeMap<String, String> {
    constants::CATEGORIES
        .iter()
        .map(|(category, region)| ((*category).to_string(), (*region).to_string()))
        .collect()
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not match the
    /// configuration schema.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            debug!("no config file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // ZPRUNE_SAVE_ROOT
        if let Ok(root) = std::env::var("ZPRUNE_SAVE_ROOT") {
            if root.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "ZPRUNE_SAVE_ROOT".to_string(),
                    value: root,
                }
                .into());
            }
            self.paths.save_root = PathBuf::from(root);
        }

        // ZPRUNE_SKIP_MISSING
        if let Ok(skip) = std::env::var("ZPRUNE_SKIP_MISSING") {
            self.scan.skip_missing = match skip.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "ZPRUNE_SKIP_MISSING".to_string(),
                        value: skip,
                    }
                    .into())
                }
            };
        }

        // ZPRUNE_MODE
        if let Ok(mode) = std::env::var("ZPRUNE_MODE") {
            self.scan.mode = mode.parse().map_err(|_| ConfigError::InvalidValue {
                field: "ZPRUNE_MODE".to_string(),
                value: mode,
            })?;
        }

        Ok(())
    }

    /// Directories to scan, in processing order
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directories are configured and the
    /// save root has no directory name to derive the sibling from.
    pub fn target_directories(&self) -> Result<Vec<PathBuf>, ConfigError> {
        match &self.paths.directories {
            Some(dirs) if dirs.is_empty() => Err(ConfigError::Invalid {
                message: "paths.directories is empty".to_string(),
            }),
            Some(dirs) => Ok(dirs.clone()),
            None => Ok(SavePaths::new(self.paths.save_root.clone())?.targets()),
        }
    }

    /// Resolve every category to its region
    ///
    /// # Errors
    ///
    /// Returns an error if the category table is empty, a category names an
    /// undefined region, or a referenced region has an empty axis range.
    pub fn category_regions(&self) -> Result<Vec<(String, Region)>, ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid {
                message: "no categories configured".to_string(),
            });
        }

        for (name, region) in &self.regions {
            check_range(name, "x", &region.x)?;
            check_range(name, "y", &region.y)?;
        }

        self.categories
            .iter()
            .map(|(category, region_name)| {
                let region = self.regions.get(region_name).ok_or_else(|| {
                    ConfigError::UnknownRegion {
                        category: category.clone(),
                        region: region_name.clone(),
                    }
                })?;
                Ok((category.clone(), region.clone()))
            })
            .collect()
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn check_range(region: &str, axis: &str, range: &std::ops::Range<i32>) -> Result<(), ConfigError> {
    if range.is_empty() {
        return Err(ConfigError::EmptyRange {
            region: region.to_string(),
            axis: axis.to_string(),
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = Config::default();
        let resolved: BTreeMap<_, _> = config.category_regions().unwrap().into_iter().collect();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved["map"], Region::new(6596..6866, 5286..5568));
        assert_eq!(resolved["chunkdata"], Region::new(21..23, 17..18));
        assert_eq!(resolved["zpop"], resolved["chunkdata"]);
        assert_eq!(config.scan.mode, PruneMode::DryRun);
    }

    #[test]
    fn unknown_region_is_rejected() {
        let mut config = Config::default();
        config
            .categories
            .insert("objects".to_string(), "nowhere".to_string());
        let err = config.category_regions().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRegion { ref region, .. } if region == "nowhere"));
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut config = Config::default();
        config
            .regions
            .insert("chunk".to_string(), Region::new(23..21, 17..18));
        let err = config.category_regions().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { ref axis, .. } if axis == "x"));
    }

    #[test]
    fn empty_category_table_is_rejected() {
        let mut config = Config::default();
        config.categories.clear();
        assert!(matches!(
            config.category_regions(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn explicit_directories_override_derived_ones() {
        let mut config = Config::default();
        config.paths.directories = Some(vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(
            config.target_directories().unwrap(),
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );

        config.paths.directories = Some(Vec::new());
        assert!(config.target_directories().is_err());
    }

    #[test]
    fn toml_output_parses_back() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.regions, config.regions);
        assert_eq!(parsed.categories, config.categories);
        assert_eq!(parsed.paths.save_root, config.paths.save_root);
    }
}
