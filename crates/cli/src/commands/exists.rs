//! Exists command implementation.

use anyhow::Result;
use confkit_config::ConfigStore;

use crate::error::ExitCode;

pub fn run(store: &ConfigStore, key: &str) -> Result<ExitCode> {
    let exists = store.exists(key);
    println!("{}", exists);
    Ok(if exists {
        ExitCode::Success
    } else {
        ExitCode::MissingKey
    })
}
