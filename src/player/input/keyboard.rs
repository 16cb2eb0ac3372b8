//! Keyboard input handling for the lyrics player.
//!
//! Handles playback controls, seeking, manual scrolling and mode toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::player::clock::PlaybackClock;
use crate::player::state::{InputResult, PlayerState};

/// Seek step for a plain arrow key, in seconds.
const SEEK_STEP_SECS: f64 = 5.0;
/// Seek step for a shifted arrow key, as a fraction of the duration.
const SEEK_STEP_FRACTION: f64 = 0.05;

/// Handle a keyboard event.
///
/// # Arguments
/// * `key` - The key event
/// * `state` - Mutable reference to the player state
/// * `clock` - Mutable reference to the playback clock
/// * `duration` - Duration of the lyric sheet (time of the last line)
/// * `sheet_rows` - Total rows the lyric sheet occupies
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    clock: &mut PlaybackClock,
    duration: f64,
    sheet_rows: usize,
) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if state.exit_mode_or_quit() {
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        // === Mode toggles ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('v') => {
            state.toggle_manual_mode();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            clock.toggle_pause();
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            clock.speed_up();
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            clock.speed_down();
            state.needs_render = true;
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            seek_by(state, clock, -seek_step(key.modifiers, duration), duration);
            InputResult::Continue
        }
        KeyCode::Right => {
            seek_by(state, clock, seek_step(key.modifiers, duration), duration);
            InputResult::Continue
        }
        KeyCode::Home => {
            seek_to(state, clock, 0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            seek_to(state, clock, duration);
            clock.pause();
            InputResult::Continue
        }

        // === Manual scrolling ===
        KeyCode::Up => {
            if state.manual_mode {
                state.scroll_up();
            }
            InputResult::Continue
        }
        KeyCode::Down => {
            if state.manual_mode {
                state.scroll_down(sheet_rows);
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

fn seek_step(modifiers: KeyModifiers, duration: f64) -> f64 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        duration * SEEK_STEP_FRACTION
    } else {
        SEEK_STEP_SECS
    }
}

fn seek_by(state: &mut PlayerState, clock: &mut PlaybackClock, delta: f64, duration: f64) {
    seek_to(state, clock, (clock.current_time() + delta).min(duration));
}

fn seek_to(state: &mut PlayerState, clock: &mut PlaybackClock, time: f64) {
    let target = time.max(0.0);
    trace!(target, "seek");
    clock.seek(target);
    state.needs_render = true;
}
