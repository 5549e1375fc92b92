//! Error types for configuration loading and lookup setup.
//!
//! Responsibilities:
//! - Define error variants for every construction-time and setter-time failure.
//! - Expose a payload-free `ConfigErrorKind` for callers that branch on category.
//!
//! Does NOT handle:
//! - Lookup misses. `get` never fails; it falls back to the caller's default.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, keys, line numbers).
//! - INI syntax errors are converted from `IniSyntaxError` and keep the 1-based line.

use std::path::PathBuf;
use thiserror::Error;

use super::ini::IniSyntaxError;

/// Errors that can occur while loading a configuration store.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot find path: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Environment '{0}' not found")]
    EnvironmentNotFound(String),

    #[error("Environment '{environment}' is a {found}, expected a mapping")]
    EnvironmentNotMapping {
        environment: String,
        found: &'static str,
    },

    #[error("Failed to read config file at {}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {}: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("INI parse error in {} at line {line}: {message}", path.display())]
    IniParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Delimiter must be a single character, got {0:?}")]
    InvalidDelimiter(String),
}

/// Category of a `ConfigError`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    PathNotFound,
    UnsupportedFormat,
    EnvironmentNotFound,
    EnvironmentNotMapping,
    ConfigFileRead,
    JsonParse,
    IniParse,
    InvalidDelimiter,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::PathNotFound { .. } => ConfigErrorKind::PathNotFound,
            ConfigError::UnsupportedFormat(_) => ConfigErrorKind::UnsupportedFormat,
            ConfigError::EnvironmentNotFound(_) => ConfigErrorKind::EnvironmentNotFound,
            ConfigError::EnvironmentNotMapping { .. } => ConfigErrorKind::EnvironmentNotMapping,
            ConfigError::ConfigFileRead { .. } => ConfigErrorKind::ConfigFileRead,
            ConfigError::JsonParse { .. } => ConfigErrorKind::JsonParse,
            ConfigError::IniParse { .. } => ConfigErrorKind::IniParse,
            ConfigError::InvalidDelimiter(_) => ConfigErrorKind::InvalidDelimiter,
        }
    }

    /// Attach a source path to an INI syntax error.
    pub(crate) fn ini(path: impl Into<PathBuf>, error: IniSyntaxError) -> Self {
        ConfigError::IniParse {
            path: path.into(),
            line: error.line,
            message: error.message,
        }
    }
}
