//! Integration tests for the modelforge CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the modelforge binary
#[allow(deprecated)]
fn modelforge_cmd() -> Command {
    Command::cargo_bin("modelforge").unwrap()
}

#[test]
fn test_help_command() {
    modelforge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modelforge CLI"))
        .stdout(predicate::str::contains("Usage: modelforge <COMMAND>"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_version_command() {
    modelforge_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_version_flag() {
    modelforge_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_init_help() {
    modelforge_cmd()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration file"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_generate_help() {
    modelforge_cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate model classes"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    modelforge_cmd()
        .current_dir(temp_dir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized successfully"));

    let config_path = temp_dir.path().join("modelforge.toml");
    assert!(config_path.exists(), "modelforge.toml should exist");

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("[database]"));
    assert!(content.contains("[generator]"));
    assert!(content.contains("AppDbContext"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("modelforge.toml"), "# existing\n").unwrap();

    modelforge_cmd()
        .current_dir(temp_dir.path())
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("modelforge.toml"), "# existing\n").unwrap();

    modelforge_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("modelforge.toml")).unwrap();
    assert!(content.contains("[generator]"));
}

#[test]
fn test_generate_without_database_config() {
    let temp_dir = TempDir::new().unwrap();

    modelforge_cmd()
        .current_dir(temp_dir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("database name is required"));
}

#[test]
fn test_generate_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    modelforge_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--config", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_command() {
    modelforge_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
