//! Rendering components for the lyrics player.
//!
//! This module contains all the UI rendering functions for the player:
//! the lyric viewport, progress bar, status bar and help overlay.

mod help;
mod progress;
mod status;
mod viewport;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, format_duration, render_progress_bar};
pub use status::{render_separator_line, render_status_bar};
pub use viewport::{center_pad, render_viewport, sheet_cell, truncate_to_width};
