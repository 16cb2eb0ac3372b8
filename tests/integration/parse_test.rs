//! Integration tests for parsing real fixture files through the library.

use super::helpers::fixtures_dir;

use lrp::player::{highlight_index, scroll_offset};
use lrp::LrcFile;

#[test]
fn parses_sample_fixture() {
    let lrc = LrcFile::parse(fixtures_dir().join("sample.lrc")).unwrap();

    assert_eq!(lrc.metadata.title.as_deref(), Some("Fixture Song"));
    assert_eq!(lrc.metadata.artist.as_deref(), Some("Fixture Artist"));
    assert_eq!(lrc.lines.len(), 4);
    assert!((lrc.duration() - 12.0).abs() < 0.005);
}

#[test]
fn parses_offset_fixture() {
    let lrc = LrcFile::parse(fixtures_dir().join("with_offset.lrc")).unwrap();

    assert_eq!(lrc.metadata.offset_ms, 500);
    assert!((lrc.offset_secs() - 0.5).abs() < 1e-9);
    assert_eq!(lrc.lines.len(), 2);
}

#[test]
fn unsorted_fixture_comes_out_sorted() {
    let lrc = LrcFile::parse(fixtures_dir().join("unsorted.lrc")).unwrap();

    let times: Vec<f64> = lrc.lines.iter().map(|l| l.time).collect();
    assert_eq!(times, vec![5.0, 10.0, 30.0, 40.0]);
    // The repeated line appears at both of its timestamps
    assert_eq!(lrc.lines[1].text, "Chorus");
    assert_eq!(lrc.lines[3].text, "Chorus");
}

#[test]
fn metadata_only_fixture_has_no_lines() {
    let lrc = LrcFile::parse(fixtures_dir().join("metadata_only.lrc")).unwrap();

    assert!(lrc.lines.is_empty());
    assert_eq!(lrc.metadata.title.as_deref(), Some("No Lyrics Here"));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = LrcFile::parse(fixtures_dir().join("does_not_exist.lrc"));
    assert!(matches!(result, Err(lrp::LrcError::Io(_))));
}

#[test]
fn highlight_tracks_the_sample_fixture() {
    let lrc = LrcFile::parse(fixtures_dir().join("sample.lrc")).unwrap();

    // Line times: 1.0, 3.5, 7.2, 12.0
    assert_eq!(highlight_index(&lrc.lines, 0.5), None);
    assert_eq!(highlight_index(&lrc.lines, 1.0), Some(0));
    assert_eq!(highlight_index(&lrc.lines, 5.0), Some(1));
    assert_eq!(highlight_index(&lrc.lines, 60.0), Some(3));
}

#[test]
fn scroll_offset_stays_in_bounds_for_fixture() {
    let lrc = LrcFile::parse(fixtures_dir().join("sample.lrc")).unwrap();
    let total = lrc.lines.len();

    for index in 0..total {
        let offset = scroll_offset(index, 2, 24, total);
        // 4 lines * 2 rows = 8 rows: fits in 24, so never scrolls
        assert_eq!(offset, 0);
    }
}
