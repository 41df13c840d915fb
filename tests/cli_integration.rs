//! Integration tests for the snooze binary
//!
//! These run the compiled CLI with `SNOOZE_HOME` pointed at a temporary
//! directory, and only exercise commands that do not need a story server.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn snooze(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("snooze").expect("binary should build");
    cmd.env("SNOOZE_HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stories"))
        .stdout(predicate::str::contains("favorite"))
        .stdout(predicate::str::contains("page"));
}

#[test]
fn test_completions_bash() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snooze"));
}

#[test]
fn test_config_set_then_get() {
    let dir = tempdir().unwrap();

    snooze(dir.path())
        .args(["config", "set", "api_url", "http://localhost:5000/"])
        .assert()
        .success();

    snooze(dir.path())
        .args(["config", "get", "api_url"])
        .assert()
        .success()
        .stdout("http://localhost:5000\n");

    assert!(dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("hack-or-snooze-v3.herokuapp.com"))
        .stdout(predicate::str::contains("use_keyring"));
}

#[test]
fn test_logout_without_session() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not currently logged in."));
}

#[test]
fn test_logout_removes_session_file_even_when_server_is_down() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(&session, r#"{"token":"tok","username":"ada"}"#).unwrap();

    snooze(dir.path())
        .args(["--api-url", "http://127.0.0.1:9", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!session.exists());
}

#[test]
fn test_status_offline_reports_saved_session() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("session.json"),
        r#"{"token":"tok","username":"ada"}"#,
    )
    .unwrap();

    snooze(dir.path())
        .args(["status", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved session for"))
        .stdout(predicate::str::contains("ada"));
}

#[test]
fn test_status_without_session() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_stories_reports_unreachable_server() {
    let dir = tempdir().unwrap();
    snooze(dir.path())
        .args(["--api-url", "http://127.0.0.1:9", "stories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load stories"));
}

#[test]
fn test_logout_recovers_from_corrupt_session() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(&session, "not json").unwrap();

    snooze(dir.path())
        .args(["--api-url", "http://127.0.0.1:9", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not currently logged in."));

    assert!(!session.exists());
}

#[test]
fn test_status_offline_ignores_corrupt_session() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("session.json"), "{").unwrap();

    snooze(dir.path())
        .args(["status", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}
