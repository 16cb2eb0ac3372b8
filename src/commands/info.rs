//! Info subcommand handler

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use lrp::lrc::{format_timestamp, LrcFile};

/// Print metadata and timing statistics for a lyrics file.
pub fn handle(file: &Path, json_output: bool) -> Result<()> {
    let lrc = LrcFile::parse(file)
        .with_context(|| format!("Failed to read lyrics file: {}", file.display()))?;

    if json_output {
        let value = json!({
            "file": file.display().to_string(),
            "title": lrc.metadata.title,
            "artist": lrc.metadata.artist,
            "album": lrc.metadata.album,
            "author": lrc.metadata.author,
            "offset_ms": lrc.metadata.offset_ms,
            "lines": lrc.lines.len(),
            "duration_secs": lrc.duration(),
            "duration": format_timestamp(lrc.duration()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if let Some(title) = &lrc.metadata.title {
        println!("Title:    {}", title);
    }
    if let Some(artist) = &lrc.metadata.artist {
        println!("Artist:   {}", artist);
    }
    if let Some(album) = &lrc.metadata.album {
        println!("Album:    {}", album);
    }
    if let Some(author) = &lrc.metadata.author {
        println!("By:       {}", author);
    }
    if lrc.metadata.offset_ms != 0 {
        println!("Offset:   {} ms", lrc.metadata.offset_ms);
    }
    println!("Lines:    {}", lrc.lines.len());
    println!("Duration: {}", format_timestamp(lrc.duration()));

    if lrc.lines.is_empty() {
        println!("Note: no timed lyric lines; this file cannot be played.");
    }

    Ok(())
}
