//! Integration tests for `confkit get`, `exists` and `show`.
//!
//! Invariants:
//! - All tests use the hermetic `confkit_cmd()` helper.

mod common;

use common::{SAMPLE_INI, SAMPLE_JSON, confkit_cmd, write_config};
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    confkit_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("get")
            .and(predicate::str::contains("exists"))
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("--delimiter")),
    );
}

#[test]
fn test_get_scalar_as_json() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("--file")
        .arg(&path)
        .args(["get", "license"])
        .assert()
        .success()
        .stdout("\"MIT\"\n");
}

#[test]
fn test_get_raw_and_indexed() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["get", "planets.0", "--raw"])
        .assert()
        .success()
        .stdout("Jupiter\n");
}

#[test]
fn test_get_nested_boolean() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["get", "languages.PHP"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_get_from_ini_is_string() {
    let (_dir, path) = write_config("config.ini", SAMPLE_INI);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["get", "languages.PHP"])
        .assert()
        .success()
        .stdout("\"1\"\n");
}

#[test]
fn test_get_with_custom_delimiter() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["-d", "/", "get", "planets/1", "--raw"])
        .assert()
        .success()
        .stdout("Saturn\n");
}

#[test]
fn test_get_with_environment_from_env_vars() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .env("CONFKIT_FILE", &path)
        .env("CONFKIT_ENV", "development")
        .args(["get", "database.host", "--raw"])
        .assert()
        .success()
        .stdout("localhost\n");
}

#[test]
fn test_get_missing_uses_default() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["get", "languages.Rust", "--default", "42"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_exists() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["exists", "license"])
        .assert()
        .success()
        .stdout("true\n");

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["exists", "optional"])
        .assert()
        .code(3)
        .stdout("false\n");
}

#[test]
fn test_show_prints_active_document() {
    let (_dir, path) = write_config("config.json", SAMPLE_JSON);

    confkit_cmd()
        .arg("-f")
        .arg(&path)
        .args(["-e", "production", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("db.internal").and(predicate::str::contains("license").not()),
        );
}
