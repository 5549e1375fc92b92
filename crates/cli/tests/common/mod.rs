//! Shared test utilities for confkit integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write the sample JSON and INI documents into a temp directory.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `CONFKIT_*` variables from the host are cleared.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const SAMPLE_JSON: &str = r#"{
    "license": "MIT",
    "languages": {"PHP": true, "JavaScript": false},
    "planets": ["Jupiter", "Saturn", "Neptun"],
    "optional": null,
    "production": {"database": {"host": "db.internal"}},
    "development": {"database": {"host": "localhost"}}
}"#;

#[allow(dead_code)]
pub const SAMPLE_INI: &str = "license = MIT\n\
planets[] = Jupiter\n\
planets[] = Saturn\n\
planets[] = Neptun\n\
\n\
[languages]\n\
PHP = 1\n\
JavaScript = 0\n";

/// Returns a hermetic `confkit` command for integration testing.
pub fn confkit_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("confkit");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("CONFKIT_FILE")
        .env_remove("CONFKIT_ENV")
        .env_remove("CONFKIT_DELIMITER")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `name` inside a fresh temp directory.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    (temp_dir, path)
}
