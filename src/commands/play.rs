//! Play subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use lrp::player::{play_file, PlayOptions, PlaybackResult};
use lrp::Config;

use crate::commands::parse_time_arg;

/// Run the player on a lyrics file.
pub fn handle(
    file: &Path,
    from: Option<&str>,
    speed: Option<f64>,
    no_offset: bool,
) -> Result<()> {
    let config = Config::load()?;

    let from = from
        .map(parse_time_arg)
        .transpose()
        .context("Invalid --from value")?
        .map(|t| t.max(0.0));

    let options = PlayOptions {
        from,
        speed: speed.unwrap_or(config.speed),
        line_height: config.line_height,
        apply_offset: !no_offset,
    };

    match play_file(file, &options)? {
        PlaybackResult::Completed => println!("Reached the end of {}", file.display()),
        PlaybackResult::Interrupted => {}
    }

    Ok(())
}
