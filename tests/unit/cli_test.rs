//! Tests for the recommender CLI surface

use assert_cmd::cargo;
use predicates::prelude::*;

use crate::common::TestDir;

/// Command with an isolated (absent) config file
fn recommender(dir: &TestDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("recommender"));
    cmd.env("RECOMMENDER_CONFIG", dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let dir = TestDir::new();
    recommender(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recommender"));
}

#[test]
fn test_help() {
    let dir = TestDir::new();
    recommender(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Each preference you leave out matches everything"));
}

#[test]
fn test_no_args_shows_info() {
    let dir = TestDir::new();
    recommender(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("recommender v"));
}

#[test]
fn test_version_json() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_message_command() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["message", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Perfect match!"));
}

#[test]
fn test_message_negative_score() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["message", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Might work"));
}

#[test]
fn test_catalog_lists_builtin() {
    let dir = TestDir::new();
    recommender(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Free-time activities"))
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn test_invalid_time_fails() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["recommend", "--time", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time budget"));
}

#[test]
fn test_negative_time_reaches_typed_error() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["recommend", "--time", "-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid time budget: \"-5\""));
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TestDir::new();
    recommender(&dir)
        .args(["--catalog"])
        .arg(dir.path().join("missing.toml"))
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load catalog"));
}
