//! CLI command implementations.

pub mod exists;
pub mod get;
pub mod show;

use anyhow::Result;
use confkit_config::ConfigValue;

/// Render a value for stdout.
///
/// With `raw`, string scalars are printed bare; everything else is pretty JSON.
pub fn render(value: &ConfigValue, raw: bool) -> Result<String> {
    if raw && let Some(s) = value.as_str() {
        return Ok(s.to_string());
    }
    Ok(serde_json::to_string_pretty(value)?)
}
