//! Viewport rendering for the lyrics player.
//!
//! Renders the visible window of the lyric sheet. Each lyric line
//! occupies `line_height` rows: one text row followed by blank spacing
//! rows. The highlighted line is drawn bright, the rest dim, and every
//! line is centered horizontally by display width.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::lrc::LrcLine;

const HIGHLIGHT_STYLE: &str = "\x1b[1;97m"; // Bold white
const DIM_STYLE: &str = "\x1b[90m"; // Dark gray
const RESET: &str = "\x1b[0m";

/// Map a sheet row to the lyric line it belongs to.
///
/// # Returns
/// `(line_index, is_text_row)` - the owning line, and whether this is
/// the row that carries the text (the first row of the group)
pub fn sheet_cell(sheet_row: usize, line_height: usize) -> (usize, bool) {
    (sheet_row / line_height, sheet_row % line_height == 0)
}

/// Truncate `text` so its display width fits in `max_cols`.
///
/// # Returns
/// `(truncated_text, display_width)`
pub fn truncate_to_width(text: &str, max_cols: usize) -> (&str, usize) {
    if text.width() <= max_cols {
        return (text, text.width());
    }

    let mut width = 0;
    let mut end = 0;
    for (pos, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_cols {
            break;
        }
        width += ch_width;
        end = pos + ch.len_utf8();
    }
    (&text[..end], width)
}

/// Left padding that centers content of `text_width` in `view_cols`.
pub fn center_pad(view_cols: usize, text_width: usize) -> usize {
    view_cols.saturating_sub(text_width) / 2
}

/// Render the lyric sheet viewport to stdout.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `lines` - The lyric lines
/// * `row_offset` - Vertical scroll offset into the sheet
/// * `view_rows` - Number of visible rows
/// * `view_cols` - Number of visible columns
/// * `highlight` - Currently active line, if any
/// * `line_height` - Rows per lyric line
pub fn render_viewport(
    stdout: &mut io::Stdout,
    lines: &[LrcLine],
    row_offset: usize,
    view_rows: usize,
    view_cols: usize,
    highlight: Option<usize>,
    line_height: usize,
) -> Result<()> {
    let sheet_rows = lines.len() * line_height;

    // Build output string to minimize syscalls
    let mut output = String::with_capacity(view_rows * view_cols);

    for view_row in 0..view_rows {
        let sheet_row = view_row + row_offset;

        // Move cursor to start of line (no clear - we overwrite full width)
        output.push_str(&format!("\x1b[{};1H", view_row + 1));

        if sheet_row >= sheet_rows {
            blank_row(&mut output, view_cols);
            continue;
        }

        let (index, is_text_row) = sheet_cell(sheet_row, line_height);
        if !is_text_row {
            blank_row(&mut output, view_cols);
            continue;
        }

        let (text, text_width) = truncate_to_width(&lines[index].text, view_cols);
        let pad = center_pad(view_cols, text_width);

        let style = if highlight == Some(index) {
            HIGHLIGHT_STYLE
        } else {
            DIM_STYLE
        };

        for _ in 0..pad {
            output.push(' ');
        }
        output.push_str(style);
        output.push_str(text);
        output.push_str(RESET);
        // Pad to full width to overwrite leftover content
        for _ in 0..(view_cols - pad - text_width) {
            output.push(' ');
        }
    }

    write!(stdout, "{}", output)?;
    Ok(())
}

fn blank_row(output: &mut String, view_cols: usize) {
    for _ in 0..view_cols {
        output.push(' ');
    }
}
