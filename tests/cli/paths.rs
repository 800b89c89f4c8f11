use crate::cli::support::{campusnet, graph_file, stdout_json, CAMPUS, ISLANDS};
use predicates::prelude::*;

#[test]
fn test_paths_campus_distances() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["paths", "--from", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest distances from 0 (Library):"))
        .stdout(predicate::str::contains("To 0 (Library): 0"))
        .stdout(predicate::str::contains("To 1 (Gym): 4"))
        .stdout(predicate::str::contains("To 2 (Main Hall): 5"))
        .stdout(predicate::str::contains("To 3 (Lab): 7"));
}

#[test]
fn test_paths_json_uses_null_for_unreachable() {
    let (_dir, path) = graph_file(ISLANDS);

    let output = campusnet()
        .args(["--format", "json", "paths", "--from", "0"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], 0);
    assert_eq!(json["reachable"], 1);
    assert_eq!(json["distances"][0]["distance"], 0);
    assert!(json["distances"][1]["distance"].is_null());
    assert_eq!(json["distances"][1]["label"], "South");
}

#[test]
fn test_paths_human_marks_unreachable() {
    let (_dir, path) = graph_file(ISLANDS);

    campusnet()
        .args(["paths", "-f", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("To 1 (South): INF"));
}

#[test]
fn test_paths_records() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--format", "records", "paths", "--from", "3"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H campusnet=1 records=1 mode=paths source=3 vertices=4 reachable=4",
        ))
        .stdout(predicate::str::contains("D 0 \"Library\" 7"))
        .stdout(predicate::str::contains("D 3 \"Lab\" 0"));
}

#[test]
fn test_paths_source_out_of_range_is_data_error() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["paths", "--from", "4"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex 4 out of range"));
}

#[test]
fn test_paths_real_weights() {
    let (_dir, path) = graph_file("3\nA\nB\nC\n2\n0 1 0.5\n1 2 1.25\n");

    campusnet()
        .args(["--weights", "real", "paths", "--from", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("To 2 (C): 1.75"));
}

#[test]
fn test_paths_fractional_weight_rejected_for_integers() {
    let (_dir, path) = graph_file("2\nA\nB\n1\n0 1 0.5\n");

    campusnet()
        .args(["paths", "--from", "0"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 5"));
}

#[test]
fn test_paths_rejects_negative_weight() {
    let (_dir, path) = graph_file("2\nA\nB\n1\n0 1 -1\n");

    campusnet()
        .args(["paths", "--from", "0"])
        .arg(&path)
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight -1 on edge 0-1"));
}

#[test]
fn test_layout_accepts_negative_weight() {
    let (_dir, path) = graph_file("2\nA\nB\n1\n0 1 -1\n");

    campusnet()
        .arg("layout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: -1"));
}
