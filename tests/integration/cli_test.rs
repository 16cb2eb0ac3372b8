//! Integration tests for the lrp CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_fixture};

fn lrp() -> Command {
    Command::cargo_bin("lrp").expect("lrp binary")
}

#[test]
fn info_prints_metadata_and_stats() {
    lrp()
        .arg("info")
        .arg(fixtures_dir().join("sample.lrc"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixture Song"))
        .stdout(predicate::str::contains("Lines:    4"))
        .stdout(predicate::str::contains("Duration: 00:12.00"));
}

#[test]
fn info_json_is_machine_readable() {
    let output = lrp()
        .arg("info")
        .arg(fixtures_dir().join("with_offset.lrc"))
        .arg("--json")
        .output()
        .expect("run lrp info --json");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(value["title"], "Offset Song");
    assert_eq!(value["offset_ms"], 500);
    assert_eq!(value["lines"], 2);
    assert!((value["duration_secs"].as_f64().unwrap() - 15.3).abs() < 0.005);
}

#[test]
fn info_notes_unplayable_files() {
    lrp()
        .arg("info")
        .arg(fixtures_dir().join("metadata_only.lrc"))
        .assert()
        .success()
        .stdout(predicate::str::contains("no timed lyric lines"));
}

#[test]
fn info_fails_on_missing_file() {
    lrp()
        .arg("info")
        .arg("/nonexistent/song.lrc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read lyrics file"));
}

#[test]
fn play_refuses_without_a_terminal() {
    // assert_cmd captures stdout, so the player's TTY check trips
    lrp()
        .arg("play")
        .arg(fixtures_dir().join("sample.lrc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn play_refuses_files_without_timed_lines() {
    lrp()
        .arg("play")
        .arg(fixtures_dir().join("metadata_only.lrc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no timed lyric lines"));
}

#[test]
fn play_rejects_bad_from_value() {
    lrp()
        .arg("play")
        .arg(fixtures_dir().join("sample.lrc"))
        .args(["--from", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --from value"));
}

#[test]
fn completions_emit_shell_script() {
    lrp()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lrp"));
}

#[test]
fn config_path_points_at_the_toml_file() {
    let home = TempDir::new().unwrap();
    lrp()
        .args(["config", "path"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let home = TempDir::new().unwrap();
    lrp()
        .args(["config", "show"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .assert()
        .success()
        .stdout(predicate::str::contains("speed = 1.0"))
        .stdout(predicate::str::contains("line_height = 2"));
}

#[test]
fn temp_fixture_files_parse_like_originals() {
    let (dir, path) = temp_fixture("sample.lrc");

    lrp()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixture Song"));

    drop(dir); // Cleanup
}
