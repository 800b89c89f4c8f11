use crate::cli::support::{campusnet, graph_file, stdout_json, CAMPUS, ISLANDS};
use predicates::prelude::*;

#[test]
fn test_layout_campus_tree() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .arg("layout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Spanning tree edges:"))
        .stdout(predicate::str::contains(
            "  1 (Gym) - 2 (Main Hall), cost=1\n  2 (Main Hall) - 3 (Lab), cost=2\n  0 (Library) - 1 (Gym), cost=4\n",
        ))
        .stdout(predicate::str::contains("Total weight: 7"));
}

#[test]
fn test_layout_disconnected_reports_forest() {
    let (_dir, path) = graph_file(ISLANDS);

    campusnet()
        .arg("layout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 components"))
        .stdout(predicate::str::contains("Total weight: 0"));
}

#[test]
fn test_layout_json() {
    let (_dir, path) = graph_file(CAMPUS);

    let output = campusnet()
        .args(["--format", "json", "layout"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total_weight"], 7);
    assert_eq!(json["components"], 1);
    assert_eq!(json["spanning_tree"], true);
    let pairs: Vec<(u64, u64)> = json["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["u"].as_u64().unwrap(), e["v"].as_u64().unwrap()))
        .collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3), (0, 1)]);
}

#[test]
fn test_layout_records() {
    let (_dir, path) = graph_file(CAMPUS);

    campusnet()
        .args(["--format", "records", "layout"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H campusnet=1 records=1 mode=layout components=1 edges=3 total=7",
        ))
        .stdout(predicate::str::contains("E 1 2 1\nE 2 3 2\nE 0 1 4\n"));
}

#[test]
fn test_layout_skips_out_of_range_edge_records() {
    let (_dir, path) = graph_file("2\nA\nB\n2\n0 7 1\n0 1 5\n");

    campusnet()
        .args(["--format", "records", "layout"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("total=5"));
}
