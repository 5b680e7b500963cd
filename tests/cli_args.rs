//! Tests for CLI argument parsing against the real binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn demo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_frmwk-demo"))
}

#[test]
fn test_help_lists_options() {
    let output = demo_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--interval"));
    assert!(stdout.contains("--paused"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_zero_interval_is_rejected() {
    let output = demo_cmd()
        .args(["--interval", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel]\ninterval_ms = 0\n").unwrap();

    let output = demo_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
    assert!(stderr.contains("interval_ms must be greater than zero"));
}
