//! CLI error handling

use std::fmt;

use zprune_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(zprune_errors::ConfigError),
    /// Pruning or other library error
    Ops(zprune_errors::Error),
    /// Invalid command arguments
    InvalidArguments(String),
    /// I/O error
    Io(std::io::Error),
}

impl CliError {
    /// Remediation hint for the user, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Config(e) => e.user_hint(),
            CliError::Ops(e) => e.user_hint(),
            CliError::InvalidArguments(_) | CliError::Io(_) => None,
        }
    }

    /// Stable error code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(e) => e.user_code().unwrap_or("error.config"),
            CliError::Ops(e) => e.user_code().unwrap_or("error.ops"),
            CliError::InvalidArguments(_) => "error.invalid_arguments",
            CliError::Io(_) => "error.io",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {e}"),
            CliError::Ops(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                Ok(())
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Ops(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<zprune_errors::ConfigError> for CliError {
    fn from(e: zprune_errors::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<zprune_errors::Error> for CliError {
    fn from(e: zprune_errors::Error) -> Self {
        match e {
            zprune_errors::Error::Config(config) => CliError::Config(config),
            other => CliError::Ops(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
