//! LRC format parser and writer
//!
//! This module provides types and functions for working with the LRC
//! timestamped-lyrics format: `[mm:ss.xx]lyric text`, with optional
//! ID tags such as `[ti:...]`, `[ar:...]` and `[offset:...]`.
//!
//! A line may carry several timestamp tags, in which case it expands to
//! one [`LrcLine`] per tag. After parsing, lines are sorted by time; the
//! highlight lookup in [`crate::player::sync`] relies on that ordering.

mod timestamp;

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use timestamp::{format_timestamp, parse_timestamp};

/// Errors produced while reading or interpreting LRC data.
#[derive(Debug, Error)]
pub enum LrcError {
    /// The file parsed, but contains no timed lyric lines.
    #[error("no timed lyric lines found")]
    Empty,
    /// A tag that looked like a timestamp failed to parse.
    #[error("invalid timestamp tag [{tag}] on line {line_no}")]
    BadTimestamp { line_no: usize, tag: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single timed lyric line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LrcLine {
    /// Time the line becomes active, in seconds
    pub time: f64,
    /// Lyric text (may be empty for instrumental gaps)
    pub text: String,
}

/// Metadata collected from LRC ID tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    /// `[ti:]` - song title
    pub title: Option<String>,
    /// `[ar:]` - artist
    pub artist: Option<String>,
    /// `[al:]` - album
    pub album: Option<String>,
    /// `[by:]` - author of the LRC file
    pub author: Option<String>,
    /// `[offset:]` - global timing adjustment in milliseconds.
    /// Positive values make lyrics appear earlier.
    pub offset_ms: i64,
}

/// Complete LRC file representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LrcFile {
    pub metadata: Metadata,
    /// Timed lines, sorted by time
    pub lines: Vec<LrcLine>,
}

impl LrcFile {
    /// Parse an LRC file from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, LrcError> {
        let file = fs::File::open(path.as_ref())?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse an LRC file from a reader.
    ///
    /// Lines without tags, blank lines and unknown ID tags are skipped.
    /// A tag starting with a digit must be a valid timestamp.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self, LrcError> {
        let mut metadata = Metadata::default();
        let mut lines = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let raw = line_result?;
            let trimmed = raw.trim_start();

            let mut rest = trimmed;
            let mut times = Vec::new();

            // Consume leading [..] tags
            while let Some(after_open) = rest.strip_prefix('[') {
                let Some(close) = after_open.find(']') else {
                    break;
                };
                let tag = &after_open[..close];
                rest = &after_open[close + 1..];

                if tag.starts_with(|c: char| c.is_ascii_digit()) {
                    let time = parse_timestamp(tag).ok_or_else(|| LrcError::BadTimestamp {
                        line_no,
                        tag: tag.to_string(),
                    })?;
                    times.push(time);
                } else if let Some((key, value)) = tag.split_once(':') {
                    apply_id_tag(&mut metadata, key.trim(), value.trim());
                } else {
                    debug!(line_no, tag, "skipping unrecognized tag");
                }
            }

            if times.is_empty() {
                continue;
            }

            let text = rest.trim().to_string();
            for time in times {
                lines.push(LrcLine {
                    time,
                    text: text.clone(),
                });
            }
        }

        // Stable sort so duplicate timestamps keep input order
        lines.sort_by(|a, b| a.time.total_cmp(&b.time));

        debug!(lines = lines.len(), "parsed lrc input");
        Ok(LrcFile { metadata, lines })
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self, LrcError> {
        Self::parse_reader(BufReader::new(content.as_bytes()))
    }

    /// Write the LRC file to a writer: metadata tags first, then one
    /// `[mm:ss.xx]text` line per entry.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), LrcError> {
        let m = &self.metadata;
        if let Some(title) = &m.title {
            writeln!(writer, "[ti:{}]", title)?;
        }
        if let Some(artist) = &m.artist {
            writeln!(writer, "[ar:{}]", artist)?;
        }
        if let Some(album) = &m.album {
            writeln!(writer, "[al:{}]", album)?;
        }
        if let Some(author) = &m.author {
            writeln!(writer, "[by:{}]", author)?;
        }
        if m.offset_ms != 0 {
            writeln!(writer, "[offset:{}]", m.offset_ms)?;
        }

        for line in &self.lines {
            writeln!(writer, "[{}]{}", format_timestamp(line.time), line.text)?;
        }

        Ok(())
    }

    /// Write the LRC file to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), LrcError> {
        let mut file = fs::File::create(path.as_ref())?;
        self.write_to(&mut file)
    }

    /// Serialize to a string.
    pub fn to_lrc_string(&self) -> Result<String, LrcError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer).expect("lrc output is valid utf-8"))
    }

    /// Time of the last line, in seconds. Zero for an empty file.
    pub fn duration(&self) -> f64 {
        self.lines.last().map(|l| l.time).unwrap_or(0.0)
    }

    /// The `[offset:]` tag converted to seconds.
    pub fn offset_secs(&self) -> f64 {
        self.metadata.offset_ms as f64 / 1000.0
    }

    /// Shift every line time by `delta_secs`, clamping at zero.
    pub fn shift(&mut self, delta_secs: f64) {
        for line in &mut self.lines {
            line.time = (line.time + delta_secs).max(0.0);
        }
        // Clamping can collapse early lines onto 0.0; order is preserved
    }
}

/// Apply a known ID tag to the metadata; unknown keys are ignored.
fn apply_id_tag(metadata: &mut Metadata, key: &str, value: &str) {
    match key {
        "ti" => metadata.title = Some(value.to_string()),
        "ar" => metadata.artist = Some(value.to_string()),
        "al" => metadata.album = Some(value.to_string()),
        "by" => metadata.author = Some(value.to_string()),
        "offset" => {
            let stripped = value.strip_prefix('+').unwrap_or(value);
            match stripped.parse::<i64>() {
                Ok(ms) => metadata.offset_ms = ms,
                Err(_) => debug!(value, "skipping malformed offset tag"),
            }
        }
        _ => debug!(key, "skipping unknown id tag"),
    }
}
