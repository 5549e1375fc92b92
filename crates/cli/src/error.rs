//! CLI exit codes and CLI-level errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `ConfigError` kinds to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.

use confkit_config::{ConfigError, ConfigErrorKind};
use thiserror::Error;

/// Structured exit codes for confkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable file or other unclassified failure.
    GeneralError = 1,

    /// The requested key is absent (or null for `exists`).
    MissingKey = 3,

    /// The file or the requested environment does not exist.
    NotFound = 4,

    /// Unsupported format, malformed content, or an invalid delimiter.
    InvalidInput = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err.kind() {
            ConfigErrorKind::PathNotFound | ConfigErrorKind::EnvironmentNotFound => {
                ExitCode::NotFound
            }
            ConfigErrorKind::UnsupportedFormat
            | ConfigErrorKind::EnvironmentNotMapping
            | ConfigErrorKind::JsonParse
            | ConfigErrorKind::IniParse
            | ConfigErrorKind::InvalidDelimiter => ExitCode::InvalidInput,
            ConfigErrorKind::ConfigFileRead => ExitCode::GeneralError,
        }
    }
}

/// A `get` without `--default` found nothing at the key.
#[derive(Error, Debug)]
#[error("Key '{0}' not found")]
pub struct KeyNotFound(pub String);

/// Failures while loading a `.env` file.
///
/// SAFETY: no variant includes raw `.env` line contents.
#[derive(Error, Debug)]
pub enum DotenvError {
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: std::io::ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<KeyNotFound>().is_some() {
                return ExitCode::MissingKey;
            }
        }
        ExitCode::GeneralError
    }
}
