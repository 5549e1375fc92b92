//! Integration tests for dotenv handling in the CLI.
//!
//! Responsibilities:
//! - Prove that `.env` values feed clap's `CONFKIT_*` defaults.
//! - Prove that invalid `.env` files fail at startup without leaking contents.
//! - Ensure DOTENV_DISABLED=1 skips a malformed `.env`.
//!
//! Invariants:
//! - Tests must explicitly clear `DOTENV_DISABLED` to enable dotenv loading.
//! - Tests set current_dir to a temp directory to isolate `.env` file effects.

mod common;

use common::{SAMPLE_JSON, confkit_cmd, write_config};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_dotenv_provides_file_default() {
    let (dir, path) = write_config("config.json", SAMPLE_JSON);
    fs::write(
        dir.path().join(".env"),
        format!("CONFKIT_FILE={}\n", path.display()),
    )
    .unwrap();

    confkit_cmd()
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .args(["get", "license", "--raw"])
        .assert()
        .success()
        .stdout("MIT\n");
}

#[test]
fn test_invalid_dotenv_fails_without_leaking() {
    let (dir, path) = write_config("config.json", SAMPLE_JSON);
    let secret_value = "supersecret_value_12345";
    fs::write(
        dir.path().join(".env"),
        format!("SECRET={}\nINVALID_LINE_WITHOUT_EQUALS", secret_value),
    )
    .unwrap();

    confkit_cmd()
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .arg("-f")
        .arg(&path)
        .args(["get", "license"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env").and(predicate::str::contains(secret_value).not()));
}

#[test]
fn test_dotenv_disabled_skips_invalid_file() {
    let (dir, path) = write_config("config.json", SAMPLE_JSON);
    fs::write(dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    confkit_cmd()
        .current_dir(dir.path())
        .arg("-f")
        .arg(&path)
        .args(["get", "license", "--raw"])
        .assert()
        .success()
        .stdout("MIT\n");
}
