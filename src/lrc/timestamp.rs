//! Timestamp parsing and formatting for LRC tags.
//!
//! LRC timestamps are `mm:ss.xx` (minutes, seconds, centiseconds). The
//! fractional part is optional and may carry one to three digits.

/// Parse an LRC timestamp string into seconds.
///
/// Accepts `mm:ss`, `mm:ss.x`, `mm:ss.xx` and `mm:ss.xxx`. The seconds
/// component must be below 60.
///
/// # Arguments
/// * `s` - The timestamp string, without the surrounding brackets
///
/// # Returns
/// The time in seconds, or `None` if the string is malformed
pub fn parse_timestamp(s: &str) -> Option<f64> {
    let (minutes, seconds) = s.split_once(':')?;

    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;

    // Seconds may carry a fractional part, but nothing else
    if seconds.is_empty()
        || !seconds
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.')
        || seconds.bytes().filter(|&b| b == b'.').count() > 1
        || seconds.starts_with('.')
        || seconds.ends_with('.')
    {
        return None;
    }
    let seconds: f64 = seconds.parse().ok()?;
    if seconds >= 60.0 {
        return None;
    }

    Some(minutes as f64 * 60.0 + seconds)
}

/// Format a time in seconds as an LRC timestamp (`mm:ss.xx`).
///
/// Rounds to centiseconds. Negative times are clamped to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let centis = (seconds.max(0.0) * 100.0).round() as u64;
    format!("{:02}:{:02}.{:02}", centis / 6000, (centis / 100) % 60, centis % 100)
}
