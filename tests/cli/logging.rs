use crate::cli::support::{campusnet, graph_file, CAMPUS};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--log-level", "debug", "paths", "--from", "0"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("CAMPUSNET_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("shortest_paths_from"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--log-level", "warn", "layout"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("CAMPUSNET_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--verbose", "layout"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("CAMPUSNET_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("minimum_spanning_forest"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let (_dir, path) = graph_file(CAMPUS);

    let output = campusnet()
        .args(["--log-level", "debug", "--log-json", "show"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("CAMPUSNET_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let json: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(json.get("level").is_some());
}

#[test]
fn test_verbose_reports_phase_timings() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--verbose", "paths", "--from", "0"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("CAMPUSNET_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("load_graph"))
        .stderr(predicate::str::contains("shortest_paths"))
        .stderr(predicate::str::contains("elapsed"));
}
