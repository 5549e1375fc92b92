//! Show command implementation.

use anyhow::Result;
use confkit_config::ConfigStore;

use crate::error::ExitCode;

pub fn run(store: &ConfigStore) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(store.data())?);
    Ok(ExitCode::Success)
}
