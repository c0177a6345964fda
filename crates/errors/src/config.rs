//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("invalid config: {message}")]
    Invalid { message: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("category {category} refers to undefined region {region}")]
    UnknownRegion { category: String, region: String },

    #[error("empty {axis} range in region {region}: {start}..{end}")]
    EmptyRange {
        region: String,
        axis: String,
        start: i32,
        end: i32,
    },

    #[error("save root has no directory name: {path}")]
    InvalidSaveRoot { path: String },

    #[error("failed to serialize config: {error}")]
    SerializeError { error: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Pass an existing file with --config or drop the flag to use defaults.")
            }
            Self::UnknownRegion { .. } => {
                Some("Define the region under [regions.<name>] or fix the [categories] entry.")
            }
            Self::EmptyRange { .. } => Some("Range end must be greater than range start."),
            Self::InvalidSaveRoot { .. } => {
                Some("Point save_root at the world directory, e.g. Saves/Multiplayer/<world>.")
            }
            Self::InvalidValue { .. } | Self::Invalid { .. } | Self::ParseError { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "config.not_found",
            Self::Invalid { .. } => "config.invalid",
            Self::ParseError { .. } => "config.parse_error",
            Self::InvalidValue { .. } => "config.invalid_value",
            Self::UnknownRegion { .. } => "config.unknown_region",
            Self::EmptyRange { .. } => "config.empty_range",
            Self::InvalidSaveRoot { .. } => "config.invalid_save_root",
            Self::SerializeError { .. } => "config.serialize_error",
        };
        Some(code)
    }
}
