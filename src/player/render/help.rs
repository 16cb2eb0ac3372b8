//! Help overlay rendering for the lyrics player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║             lrp Player Help               ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Pause / Resume              ║",
    "  ║    ←/→        Seek -/+5s                  ║",
    "  ║    Shift+←/→  Seek -/+5%                  ║",
    "  ║    +/-        Speed up / down             ║",
    "  ║    Home/End   Go to start / end           ║",
    "  ║                                           ║",
    "  ║  Scrolling                                ║",
    "  ║    v          Toggle manual scroll mode   ║",
    "  ║    ↑/↓        Scroll sheet (manual mode)  ║",
    "  ║    Esc        Back to synced scrolling    ║",
    "  ║                                           ║",
    "  ║  Other                                    ║",
    "  ║    ?          Toggle this help            ║",
    "  ║    q / Esc    Quit                        ║",
    "  ║                                           ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box in columns.
pub const HELP_BOX_WIDTH: u16 = 47;

/// Starting column that centers the help box.
pub fn calc_help_start_col(term_cols: u16) -> u16 {
    term_cols.saturating_sub(HELP_BOX_WIDTH) / 2
}

/// Starting row that centers the help box.
pub fn calc_help_start_row(term_rows: u16) -> u16 {
    term_rows.saturating_sub(HELP_LINES.len() as u16) / 2
}

/// Render the help overlay centered on the screen.
pub fn render_help(stdout: &mut io::Stdout, term_cols: u16, term_rows: u16) -> Result<()> {
    let start_col = calc_help_start_col(term_cols);
    let start_row = calc_help_start_row(term_rows);

    execute!(stdout, SetForegroundColor(Color::Cyan))?;
    for (i, line) in HELP_LINES.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(start_col, start_row + i as u16),
            Print(line)
        )?;
    }
    execute!(stdout, ResetColor)?;

    Ok(())
}
