//! Subcommand handlers for the lrp binary.

pub mod config;
pub mod info;
pub mod play;
pub mod shift;

use anyhow::{anyhow, Result};

use lrp::lrc::parse_timestamp;

/// Parse a time argument: `mm:ss.xx` or plain seconds, with an optional
/// leading sign.
pub(crate) fn parse_time_arg(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = if rest.contains(':') {
        parse_timestamp(rest)
    } else {
        rest.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    };

    magnitude
        .map(|m| sign * m)
        .ok_or_else(|| anyhow!("Invalid time value '{s}' (expected mm:ss.xx or seconds)"))
}
