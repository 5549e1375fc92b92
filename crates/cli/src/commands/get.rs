//! Get command implementation.

use anyhow::Result;
use confkit_config::{ConfigStore, ConfigValue};
use tracing::debug;

use crate::commands::render;
use crate::error::{ExitCode, KeyNotFound};

pub fn run(store: &ConfigStore, key: &str, default: Option<&str>, raw: bool) -> Result<ExitCode> {
    let value = match (store.get(key), default) {
        (Some(value), _) => value,
        (None, Some(fallback)) => {
            debug!(key, "Key not found, using default");
            parse_default(fallback)
        }
        (None, None) => return Err(KeyNotFound(key.to_string()).into()),
    };

    println!("{}", render(&value, raw)?);
    Ok(ExitCode::Success)
}

/// Interpret `--default` as JSON, falling back to a plain string.
fn parse_default(raw: &str) -> ConfigValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(ConfigValue::from)
        .unwrap_or_else(|_| ConfigValue::from(raw))
}
