use crate::cli::support::{campusnet, graph_file, CAMPUS, ISLANDS};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_sets_default_format() {
    let (dir, path) = graph_file(CAMPUS);
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nformat = \"records\"\n").unwrap();

    campusnet()
        .arg("--config")
        .arg(&config)
        .arg("layout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H campusnet=1"));
}

#[test]
fn test_format_flag_overrides_config() {
    let (dir, path) = graph_file(CAMPUS);
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nformat = \"records\"\n").unwrap();

    campusnet()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "layout"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 7"));
}

#[test]
fn test_config_unreachable_text() {
    let (dir, path) = graph_file(ISLANDS);
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nunreachable = \"unreachable\"\n").unwrap();

    campusnet()
        .arg("--config")
        .arg(&config)
        .args(["paths", "--from", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("To 1 (South): unreachable"));
}

#[test]
fn test_config_real_weights() {
    let (dir, path) = graph_file("2\nA\nB\n1\n0 1 2.5\n");
    let config = dir.path().join("config.toml");
    fs::write(&config, "weights = \"real\"\n").unwrap();

    campusnet()
        .arg("--config")
        .arg(&config)
        .arg("layout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 2.5"));
}

#[test]
fn test_default_config_dir_override() {
    let (dir, path) = graph_file(CAMPUS);
    fs::write(
        dir.path().join("config.toml"),
        "[output]\nformat = \"records\"\n",
    )
    .unwrap();

    campusnet()
        .env("CAMPUSNET_CONFIG_DIR", dir.path())
        .env_remove("CAMPUSNET_CONFIG")
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H campusnet=1 records=1 mode=graph"));
}

#[test]
fn test_broken_config_fails() {
    let (dir, path) = graph_file(CAMPUS);
    let config = dir.path().join("config.toml");
    fs::write(&config, "weights = 5\n").unwrap();

    campusnet()
        .arg("--config")
        .arg(&config)
        .arg("show")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
