//! Highlight-index lookup and scroll-offset computation.
//!
//! These two functions drive the player: on every clock tick the current
//! time is mapped to the active lyric line, and the viewport is scrolled
//! so that line sits centered.

use crate::lrc::LrcLine;

/// Find the index of the lyric line active at `time`.
///
/// Returns the last line whose time is <= `time`, or `None` when `time`
/// is still before the first line. Requires `lines` sorted by time,
/// which [`crate::lrc::LrcFile::parse_reader`] guarantees.
///
/// The result is monotonically non-decreasing in `time` for a fixed set
/// of lines, so playback never highlights backwards without a seek.
pub fn highlight_index(lines: &[LrcLine], time: f64) -> Option<usize> {
    let upcoming = lines.partition_point(|line| line.time <= time);
    upcoming.checked_sub(1)
}

/// Compute the viewport scroll offset (in rows) that centers the
/// highlighted line.
///
/// Each lyric line occupies `line_height` rows in the sheet. The offset
/// targets the vertical center of the highlighted line, clamped so the
/// viewport never scrolls past the start or end of the sheet. When the
/// whole sheet fits in the viewport the offset is 0.
///
/// # Arguments
/// * `index` - Highlighted line index
/// * `line_height` - Rows per lyric line (>= 1)
/// * `view_rows` - Visible rows in the viewport
/// * `total_lines` - Total number of lyric lines
pub fn scroll_offset(
    index: usize,
    line_height: usize,
    view_rows: usize,
    total_lines: usize,
) -> usize {
    let sheet_rows = total_lines * line_height;
    let max_offset = sheet_rows.saturating_sub(view_rows);

    let center = index * line_height + line_height / 2;
    let offset = center.saturating_sub(view_rows / 2);

    offset.min(max_offset)
}

/// Total rows the lyric sheet occupies.
pub fn sheet_rows(total_lines: usize, line_height: usize) -> usize {
    total_lines * line_height
}
