use crate::cli::support::{campusnet, graph_file};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    campusnet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campusnet"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    campusnet()
        .arg("show")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph"));
}

#[test]
fn test_negative_vertex_count_is_invalid_size() {
    let (_dir, path) = graph_file("-3\n");

    campusnet()
        .arg("layout")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid size: -3"));
}

#[test]
fn test_json_error_envelope() {
    let (_dir, path) = graph_file("-1\n");

    let output = campusnet()
        .args(["--format", "json", "show"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_size");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_usage_error_with_json_format() {
    let output = campusnet()
        .args(["--format", "json", "paths"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format_is_usage_error() {
    campusnet()
        .args(["--format", "xml", "show", "-"])
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_text() {
    let (_dir, path) = graph_file("-1\n");

    campusnet()
        .args(["--quiet", "show"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
