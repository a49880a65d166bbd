//! Integration tests for the CLI binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A project root with every default required file present.
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in ["package.json", "tsconfig.json", ".env"] {
        fs::write(temp.path().join(file), "{}").unwrap();
    }
    temp
}

fn loopcheck() -> Command {
    Command::new(cargo_bin("loopcheck"))
}

#[test]
fn cli_shows_help() {
    loopcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment status checks"));
}

#[test]
fn cli_shows_version() {
    loopcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_no_args_runs_check() {
    let temp = setup_project();
    loopcheck()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn check_reports_missing_files_but_exits_zero() {
    let temp = TempDir::new().unwrap();
    loopcheck()
        .args(["check", "--project"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing required files"));
}

#[test]
fn check_missing_project_root_exits_2() {
    loopcheck()
        .args(["check", "--project", "/no/such/dir/loopcheck-test"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project root not found"));
}

#[test]
fn check_json_emits_parseable_report() {
    let temp = setup_project();
    let output = loopcheck()
        .args(["check", "--json", "--project"])
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["checks"].as_array().unwrap().len(), 5);
    assert!(report["summary"]["ok"].is_u64());
}

#[test]
fn check_accepts_override_lists() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("custom.toml"), "").unwrap();

    loopcheck()
        .args(["check", "--files", "custom.toml", "--env-vars", "LOOPCHECK_TEST_VAR"])
        .args(["--project"])
        .arg(temp.path())
        .env("LOOPCHECK_TEST_VAR", "set")
        .assert()
        .success()
        .stdout(predicate::str::contains("All required configuration files are present"));
}

#[test]
fn quiet_mode_hides_check_lines() {
    let temp = setup_project();
    loopcheck()
        .args(["check", "--quiet", "--project"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("Required Files").not());
}

#[test]
fn list_shows_registered_checks() {
    loopcheck()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Node.js Version"))
        .stdout(predicate::str::contains("Port Availability"));
}
