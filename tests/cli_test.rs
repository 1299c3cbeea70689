//! CLI tests for the instance-config binary.
//!
//! Each test runs the binary with a cleared environment inside a temporary
//! directory, so only the variables set here reach the seeder.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Build a hermetic command whose database lives in `dir`.
fn instance_config_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("instance-config");
    cmd.current_dir(dir)
        .env_clear()
        .env("INSTANCE_CONFIG_DATABASE__PATH", dir.join("instance.db"))
        .env("INSTANCE_CONFIG_LOGGING__LEVEL", "warn");
    cmd
}

fn parse_stdout(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout)
        .unwrap_or_else(|e| panic!("stdout is not a single JSON document: {e}\n{}", String::from_utf8_lossy(stdout)))
}

fn entry<'a>(report: &'a Value, key: &str) -> &'a Value {
    report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["key"] == key)
        .unwrap_or_else(|| panic!("no entry for {key}"))
}

#[test]
fn test_failed_json_seed_prints_one_document() {
    let dir = TempDir::new().unwrap();

    let output = instance_config_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-x")
        .args(["--json", "seed"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = parse_stdout(&output);
    assert_eq!(report["success"], false);
    assert_eq!(report["failure_count"], 1);
    assert_eq!(entry(&report, "OPENAI_API_KEY")["status"], "failed");
    assert_eq!(entry(&report, "ENABLE_SIGNUP")["status"], "created");
}

#[test]
fn test_successful_json_seed_then_list() {
    let dir = TempDir::new().unwrap();

    let output = instance_config_cmd(dir.path())
        .env("SECRET_KEY", "cli-secret")
        .env("GITHUB_CLIENT_SECRET", "abc123")
        .args(["--json", "seed"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = parse_stdout(&output);
    assert_eq!(report["success"], true);
    assert_eq!(report["failure_count"], 0);

    let output = instance_config_cmd(dir.path())
        .args(["--json", "list", "--category", "GITHUB"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = parse_stdout(&output);
    let secret = listing["configurations"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["key"] == "GITHUB_CLIENT_SECRET")
        .unwrap();
    assert_eq!(secret["value"], "********");
}

#[test]
fn test_failed_human_seed_reports_on_stderr() {
    let dir = TempDir::new().unwrap();

    instance_config_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-x")
        .arg("seed")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("OPENAI_API_KEY failed"))
        .stderr(predicate::str::contains("1 configuration item(s) could not be seeded"));
}
