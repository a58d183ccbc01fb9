//! End-to-end tests for the `streamwatch` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from any user configuration.
fn streamwatch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("streamwatch").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("STREAMWATCH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn spike_recording(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("recording.txt");
    let mut text = String::from("# flat history then one spike\n");
    for _ in 0..9 {
        text.push_str("1.0\n");
    }
    text.push_str("50.0\n");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    streamwatch(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn replay_file_flags_spike() {
    let home = TempDir::new().unwrap();
    let path = spike_recording(&home);
    streamwatch(&home)
        .args(["--window-size", "10", "--threshold", "2", "replay", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ANOMALY"))
        .stdout(predicate::str::contains("anomalies: 1"));
}

#[test]
fn replay_stdin_json_anomalies_only() {
    let home = TempDir::new().unwrap();
    let output = streamwatch(&home)
        .args(["-o", "json", "-a", "-w", "10", "-t", "2", "replay"])
        .write_stdin("1\n1\n1\n1\n1\n1\n1\n1\n1\n50\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"index":9,"value":50.0,"is_anomaly":true}"#);

    let summary: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(summary["summary"]["samples"], 10);
    assert_eq!(summary["summary"]["anomalies"], 1);
}

#[test]
fn small_window_cannot_exceed_equal_threshold() {
    let home = TempDir::new().unwrap();
    let path = spike_recording(&home);
    streamwatch(&home)
        .args(["-w", "5", "-t", "2.0", "replay", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("anomalies: 0"));
}

#[test]
fn simulate_seeded_json_run() {
    let home = TempDir::new().unwrap();
    let output = streamwatch(&home)
        .args([
            "--output",
            "json",
            "simulate",
            "--samples",
            "300",
            "--seed",
            "11",
            "--interval-ms",
            "0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 301);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["index"], 0);
    assert_eq!(first["is_anomaly"], false);
    assert!(first["injected"].is_boolean());

    let summary: serde_json::Value = serde_json::from_str(lines[300]).unwrap();
    assert_eq!(summary["summary"]["samples"], 300);
    assert!(summary["summary"]["injected"].is_u64());
}

#[test]
fn zero_window_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = spike_recording(&home);
    streamwatch(&home)
        .args(["--window-size", "0", "replay", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("window_size"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn negative_threshold_is_rejected() {
    let home = TempDir::new().unwrap();
    streamwatch(&home)
        .args(["--threshold", "-1", "simulate", "--samples", "5", "--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn malformed_recording_reports_line() {
    let home = TempDir::new().unwrap();
    streamwatch(&home)
        .arg("replay")
        .write_stdin("1\n2\nnot-a-number\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn config_file_values_and_overrides() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("streamwatch.toml");
    fs::write(&path, "[detector]\nwindow_size = 12\nthreshold = 2.5\n").unwrap();

    streamwatch(&home)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("window_size = 12"))
        .stdout(predicate::str::contains("threshold = 2.5"));

    streamwatch(&home)
        .arg("--config")
        .arg(&path)
        .args(["--threshold", "4", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 4.0"));
}

#[test]
fn default_config_file_is_picked_up() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("streamwatch");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[detector]\nwindow_size = 7\n").unwrap();

    streamwatch(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("window_size = 7"));
}

#[test]
fn replay_logs_final_detector_state() {
    let home = TempDir::new().unwrap();
    streamwatch(&home)
        .args(["-w", "5", "replay"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("WarmingUp"));

    streamwatch(&home)
        .args(["-w", "2", "replay"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Active"));
}
