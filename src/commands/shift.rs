//! Shift subcommand handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use lrp::lrc::LrcFile;

use crate::commands::parse_time_arg;

/// Shift every timestamp in a lyrics file by a signed amount.
///
/// Writes the result to `output` when given, otherwise to stdout.
pub fn handle(file: &Path, delta: &str, output: Option<&Path>) -> Result<()> {
    let delta = parse_time_arg(delta)?;

    let mut lrc = LrcFile::parse(file)
        .with_context(|| format!("Failed to read lyrics file: {}", file.display()))?;
    lrc.shift(delta);

    match output {
        Some(path) => {
            lrc.write(path)
                .with_context(|| format!("Failed to write shifted file: {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            lrc.write_to(&mut handle)
                .context("Failed to write shifted lyrics to stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}
