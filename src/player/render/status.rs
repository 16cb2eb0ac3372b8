//! Status bar rendering for the lyrics player.
//!
//! Displays playback state, the current line position, mode indicators
//! and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

/// Render a separator line.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `paused` - Whether playback is paused
/// * `speed` - Current playback speed
/// * `highlight` - Currently active line, if any
/// * `total_lines` - Total number of lyric lines
/// * `manual_mode` - Whether manual scroll mode is active
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    paused: bool,
    speed: f64,
    highlight: Option<usize>,
    total_lines: usize,
    manual_mode: bool,
) -> Result<()> {
    // ANSI color codes
    const WHITE: &str = "\x1b[97m";
    const MAGENTA: &str = "\x1b[35m";
    const DARK_GREY: &str = "\x1b[90m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let state = if paused { "⏸  " } else { "▶  " };
    output.push_str(state);
    visible_len += 4; // icon (2) + 2 spaces

    if manual_mode {
        output.push_str(MAGENTA);
        output.push_str("[S] ");
        visible_len += 4;
    }

    output.push_str(DARK_GREY);
    output.push_str("spd:");
    visible_len += 4;
    output.push_str(WHITE);
    let speed_str = format!("{:.1}x ", speed);
    visible_len += speed_str.len();
    output.push_str(&speed_str);

    // Current line position, 1-based; "-" before the first line
    output.push_str(DARK_GREY);
    output.push_str("line:");
    visible_len += 5;
    output.push_str(WHITE);
    let line_str = match highlight {
        Some(index) => format!("{}/{} ", index + 1, total_lines),
        None => format!("-/{} ", total_lines),
    };
    visible_len += line_str.len();
    output.push_str(&line_str);

    let play_action = if paused { ":play " } else { ":pause " };
    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    output.push_str(CYAN);
    output.push_str("space");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(play_action);
    visible_len += play_action.len();
    output.push_str(CYAN);
    output.push_str("←/→");
    visible_len += 3;
    output.push_str(DARK_GREY);
    output.push_str(":seek ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push('v');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":scrl ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push('?');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":hlp ");
    visible_len += 5;
    output.push_str(CYAN);
    output.push('q');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":quit");
    visible_len += 5;

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
