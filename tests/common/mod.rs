//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scenario with three features: 45.00 / ±0.35 / ±0.229
pub const THREE_FEATURES_YAML: &str = r#"
title: Housing gap
features:
  - length: 10.0
    tolerance: 0.1
  - length: 20.0
    tolerance: 0.2
  - length: 15.0
    tolerance: 0.05
"#;

/// Helper to get a stackup command with a clean environment
pub fn stackup() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("stackup"));
    cmd.env_remove("STACKUP_FORMAT")
        .env_remove("STACKUP_POLICY")
        .env_remove("STACKUP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a temp workspace with an empty config file
pub fn setup_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.yaml"), "").unwrap();
    tmp
}

/// Helper to get a stackup command running inside a workspace, using its config
pub fn stackup_in(tmp: &TempDir) -> Command {
    let mut cmd = stackup();
    cmd.current_dir(tmp.path())
        .env("STACKUP_CONFIG", tmp.path().join("config.yaml"));
    cmd
}

/// Helper to write a file into the workspace
pub fn write_file(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper to run a command and parse its stdout as JSON
pub fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Approximate float comparison for JSON values
pub fn assert_close(value: &serde_json::Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("not a number: {}", value));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
