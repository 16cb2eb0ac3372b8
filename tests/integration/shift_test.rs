//! Integration tests for the shift subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::fixtures_dir;

use lrp::LrcFile;

fn lrp() -> Command {
    Command::cargo_bin("lrp").expect("lrp binary")
}

#[test]
fn shift_forward_moves_timestamps() {
    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("sample.lrc"))
        .arg("2.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:03.50]First line"))
        .stdout(predicate::str::contains("[00:14.50]Fourth line"));
}

#[test]
fn shift_accepts_timestamp_deltas() {
    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("sample.lrc"))
        .arg("01:00.00")
        .assert()
        .success()
        .stdout(predicate::str::contains("[01:01.00]First line"));
}

#[test]
fn shift_backward_clamps_at_zero() {
    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("sample.lrc"))
        .arg("-2.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:00.00]First line"))
        .stdout(predicate::str::contains("[00:01.50]Second line"));
}

#[test]
fn shift_preserves_metadata_tags() {
    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("with_offset.lrc"))
        .arg("1.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ti:Offset Song]"))
        .stdout(predicate::str::contains("[offset:500]"));
}

#[test]
fn shift_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("shifted.lrc");

    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("sample.lrc"))
        .arg("10")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let shifted = LrcFile::parse(&out).unwrap();
    assert_eq!(shifted.lines.len(), 4);
    assert!((shifted.lines[0].time - 11.0).abs() < 0.005);
    assert!((shifted.duration() - 22.0).abs() < 0.005);
}

#[test]
fn shift_rejects_bad_delta() {
    lrp()
        .arg("shift")
        .arg(fixtures_dir().join("sample.lrc"))
        .arg("sideways")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time value"));
}
