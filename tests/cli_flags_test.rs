//! Binary-level tests for the non-interactive flags.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chatdeck"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("CHATDECK_HOME")
        .output()
        .expect("Failed to execute binary")
}

fn write_settings(dir: &Path, json: &str) {
    fs::write(dir.join("settings.json"), json).unwrap();
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatdeck"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("chatdeck ").unwrap_or("");
    assert_eq!(version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatdeck"))
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--status"));
    assert!(stdout.contains("--data-dir"));
}

#[test]
fn test_status_masks_api_key() {
    let dir = TempDir::new().unwrap();
    write_settings(
        dir.path(),
        r#"{
  "openai_api_key": "sk-proj-verysecretmaterial-5678",
  "chatkit_workflow_id": "wf_status",
  "chatkit_workflow_version": "2"
}"#,
    );

    let output = run(dir.path(), &["--status"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ready"));
    assert!(stdout.contains("wf_status"));
    assert!(stdout.contains("Workflow version: 2"));
    assert!(stdout.contains("5678"));
    assert!(!stdout.contains("verysecretmaterial"));
}

#[test]
fn test_status_on_empty_dir() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--status"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("incomplete"));
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_clear_removes_stored_entries() {
    let dir = TempDir::new().unwrap();
    write_settings(
        dir.path(),
        r#"{"openai_api_key": "sk-1", "chatkit_workflow_id": "wf_1", "other": "kept"}"#,
    );

    let output = run(dir.path(), &["--clear"]);
    assert!(output.status.success());

    let raw = fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert!(!raw.contains("openai_api_key"));
    assert!(!raw.contains("chatkit_workflow_id"));
    assert!(raw.contains("kept"));
}

#[test]
fn test_data_dir_without_value_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatdeck"))
        .arg("--data-dir")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--data-dir requires a value"));
}
