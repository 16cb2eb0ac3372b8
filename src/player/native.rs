//! Main event loop for the lyrics player.
//!
//! Ties the playback clock, the highlight lookup and the renderer
//! together: poll input at ~30 Hz, map the current time to a lyric
//! line, scroll the viewport to center it, and redraw.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use tracing::debug;

use crate::lrc::{LrcError, LrcFile};
use crate::player::clock::PlaybackClock;
use crate::player::input;
use crate::player::render;
use crate::player::state::{InputResult, PlayerState};
use crate::player::sync::{highlight_index, scroll_offset, sheet_rows};

/// Poll interval for the event loop.
const TICK: Duration = Duration::from_millis(33);

/// Options controlling a playback session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Start position in seconds
    pub from: Option<f64>,
    /// Initial playback speed multiplier
    pub speed: f64,
    /// Rows each lyric line occupies
    pub line_height: usize,
    /// Whether to honor the `[offset:]` tag
    pub apply_offset: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            from: None,
            speed: 1.0,
            line_height: 2,
            apply_offset: true,
        }
    }
}

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Playback reached the last line before the user quit
    Completed,
    /// The user quit mid-song
    Interrupted,
}

/// Play a lyrics file in the terminal.
///
/// Refuses to start when stdout is not a TTY or the file has no timed
/// lines. The terminal is restored on every exit path, including
/// errors from the loop itself.
pub fn play_file(path: &Path, options: &PlayOptions) -> Result<PlaybackResult> {
    let lrc = LrcFile::parse(path)
        .with_context(|| format!("Failed to read lyrics file: {}", path.display()))?;

    if lrc.lines.is_empty() {
        return Err(LrcError::Empty)
            .with_context(|| format!("Nothing to play in {}", path.display()));
    }

    if !atty::is(atty::Stream::Stdout) {
        bail!("Refusing to start the player: stdout is not a terminal");
    }

    let (cols, rows) = terminal::size().context("Failed to query terminal size")?;
    debug!(cols, rows, lines = lrc.lines.len(), "starting player");

    setup_terminal()?;
    let result = run_loop(&lrc, options, cols, rows);
    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<()> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
    .context("Failed to set up the terminal")?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    execute!(
        io::stdout(),
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("Failed to restore the terminal")?;
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

fn run_loop(
    lrc: &LrcFile,
    options: &PlayOptions,
    cols: u16,
    rows: u16,
) -> Result<PlaybackResult> {
    let mut stdout = io::stdout();
    let mut state = PlayerState::new(cols, rows, options.line_height);
    let mut clock = PlaybackClock::new(options.speed);

    let duration = lrc.duration();
    let offset = if options.apply_offset {
        lrc.offset_secs()
    } else {
        0.0
    };
    if let Some(from) = options.from {
        clock.seek(from.clamp(0.0, duration));
    }

    let total_rows = sheet_rows(lrc.lines.len(), state.line_height);
    let mut end_reached = false;

    loop {
        if event::poll(TICK)? {
            let event = event::read()?;
            match input::handle_event(event, &mut state, &mut clock, duration, total_rows) {
                InputResult::Continue => {}
                InputResult::Quit => {
                    return Ok(if end_reached {
                        PlaybackResult::Completed
                    } else {
                        PlaybackResult::Interrupted
                    });
                }
            }
        }

        let mut time = clock.current_time();
        if time >= duration {
            if !clock.is_paused() {
                clock.seek(duration);
                clock.pause();
                state.needs_render = true;
            }
            time = duration;
            end_reached = true;
        } else {
            // Seeking back re-arms the end detection
            end_reached = false;
        }

        // Positive [offset:] makes lyrics appear earlier
        let index = highlight_index(&lrc.lines, time + offset);

        if !state.manual_mode {
            let target = index
                .map(|i| scroll_offset(i, state.line_height, state.view_rows, lrc.lines.len()))
                .unwrap_or(0);
            if target != state.view_row_offset {
                state.view_row_offset = target;
                state.needs_render = true;
            }
        }

        // While playing the progress bar advances, so redraw every tick;
        // while paused only when something changed.
        if state.needs_render || !clock.is_paused() {
            render_frame(&mut stdout, lrc, &state, &clock, index, time, duration)?;
            state.needs_render = false;
        }
    }
}

fn render_frame(
    stdout: &mut io::Stdout,
    lrc: &LrcFile,
    state: &PlayerState,
    clock: &PlaybackClock,
    highlight: Option<usize>,
    time: f64,
    duration: f64,
) -> Result<()> {
    render::render_viewport(
        stdout,
        &lrc.lines,
        state.view_row_offset,
        state.view_rows,
        state.view_cols,
        highlight,
        state.line_height,
    )?;

    let chrome_row = state.term_rows.saturating_sub(PlayerState::CHROME_LINES);
    render::render_separator_line(stdout, state.term_cols, chrome_row)?;
    render::render_progress_bar(stdout, state.term_cols, chrome_row + 1, time, duration)?;
    render::render_status_bar(
        stdout,
        state.term_cols,
        chrome_row + 2,
        clock.is_paused(),
        clock.speed(),
        highlight,
        lrc.lines.len(),
        state.manual_mode,
    )?;

    if state.show_help {
        render::render_help(stdout, state.term_cols, state.term_rows)?;
    }

    stdout.flush()?;
    Ok(())
}
