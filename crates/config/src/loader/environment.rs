//! Environment subtree selection.
//!
//! Responsibilities:
//! - Narrow a parsed document to the mapping stored under an environment key.
//!
//! Invariants:
//! - With no environment, the document is returned unchanged.
//! - A missing or `null` environment key is `EnvironmentNotFound`.
//! - An environment key holding anything but a mapping is `EnvironmentNotMapping`.

use super::error::ConfigError;
use crate::value::{ConfigValue, Mapping};

/// Select the active root mapping for `environment`.
pub fn select(mut data: Mapping, environment: Option<&str>) -> Result<Mapping, ConfigError> {
    let Some(name) = environment else {
        return Ok(data);
    };

    match data.remove(name) {
        Some(ConfigValue::Mapping(subtree)) => {
            tracing::debug!(environment = name, entries = subtree.len(), "Environment selected");
            Ok(subtree)
        }
        None | Some(ConfigValue::Null) => Err(ConfigError::EnvironmentNotFound(name.to_string())),
        Some(other) => Err(ConfigError::EnvironmentNotMapping {
            environment: name.to_string(),
            found: other.type_name(),
        }),
    }
}
