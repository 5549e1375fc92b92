//! Configuration file loading.
//!
//! Responsibilities:
//! - Validate the source path and pick a parser from its extension.
//! - Read the file once and hand the bytes to the format parser.
//! - Narrow the parsed document to an environment subtree when requested.
//!
//! Does NOT handle:
//! - Path lookups or caching (see `resolver.rs`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - The path must name an existing regular file; anything else is `PathNotFound`.
//! - Errors surface in pipeline order: path, format, read, parse, environment.

mod environment;
mod error;
mod format;
mod ini;
mod json;

use std::path::Path;

pub use environment::select as select_environment;
pub use error::{ConfigError, ConfigErrorKind};
pub use format::Format;
pub use ini::{IniSyntaxError, parse as parse_ini};

use crate::value::Mapping;

/// Load and parse the file at `path`.
pub fn load_file(path: &Path) -> Result<(Format, Mapping), ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = Format::from_path(path)?;
    let content = std::fs::read(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data = format.parse(path, &content)?;

    tracing::debug!(
        path = %path.display(),
        format = %format,
        entries = data.len(),
        "Config file loaded"
    );
    Ok((format, data))
}

/// Load the file at `path` and select `environment` from it.
pub fn load(path: &Path, environment: Option<&str>) -> Result<(Format, Mapping), ConfigError> {
    let (format, data) = load_file(path)?;
    let data = select_environment(data, environment)?;
    Ok((format, data))
}
