//! End-to-end tests for the `fanprobe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fanprobe() -> Command {
    let mut cmd = Command::cargo_bin("fanprobe").unwrap();
    cmd.env_remove("ENDPOINTS_FILE")
        .env_remove("NUM_WORKERS")
        .env_remove("LOG_FORMAT")
        .env("RUST_LOG", "warn");
    cmd
}

fn endpoints_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Usage ====================

#[test]
fn test_missing_file_argument_prints_usage() {
    fanprobe()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_help_lists_options() {
    fanprobe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--num-workers"));
}

// ==================== Fatal errors ====================

#[test]
fn test_unreadable_file_fails_with_one_line_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("endpoints.txt");

    fanprobe()
        .arg("--file")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("fanprobe: Failed to read"));
}

#[test]
fn test_zero_workers_is_rejected() {
    let file = endpoints_file("a\nb\n");

    fanprobe()
        .arg("--file")
        .arg(file.path())
        .args(["--num-workers", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "fanprobe: NUM_WORKERS must be greater than 0",
        ));
}

#[test]
fn test_non_numeric_workers_is_a_usage_error() {
    let file = endpoints_file("a\n");

    fanprobe()
        .arg("--file")
        .arg(file.path())
        .args(["--num-workers", "many"])
        .assert()
        .code(2);
}

// ==================== Probing ====================

#[test]
fn test_every_endpoint_is_probed() {
    let file = endpoints_file(concat!(
        "https://a.local\n",
        "https://b.local\n",
        "https://c.local\n",
        "https://d.local\n",
        "https://e.local\n",
    ));

    let output = fanprobe()
        .arg("--file")
        .arg(file.path())
        .args(["--num-workers", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let mut lines: Vec<&str> = stdout.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        [
            "Calling endpoint: https://a.local",
            "Calling endpoint: https://b.local",
            "Calling endpoint: https://c.local",
            "Calling endpoint: https://d.local",
            "Calling endpoint: https://e.local",
        ]
    );
}

#[test]
fn test_blank_lines_are_probed_as_empty_endpoints() {
    let file = endpoints_file("a\n\nb\n");

    fanprobe()
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Calling endpoint: a\n"))
        .stdout(predicate::str::contains("Calling endpoint: b\n"))
        .stdout(predicate::str::contains("Calling endpoint: \n"));
}

#[test]
fn test_empty_file_succeeds_silently() {
    let file = endpoints_file("");

    fanprobe()
        .arg("--file")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_can_come_from_environment() {
    let file = endpoints_file("10.0.0.1:6443\n");

    fanprobe()
        .env("ENDPOINTS_FILE", file.path())
        .env("NUM_WORKERS", "4")
        .assert()
        .success()
        .stdout("Calling endpoint: 10.0.0.1:6443\n");
}

#[test]
fn test_more_workers_than_endpoints() {
    let file = endpoints_file("a\nb\nc\n");

    let output = fanprobe()
        .arg("--file")
        .arg(file.path())
        .args(["--num-workers", "64"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 3);
}
