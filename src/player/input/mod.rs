//! Input handling for the lyrics player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::{Event, KeyEventKind};

use crate::player::clock::PlaybackClock;
use crate::player::state::{InputResult, PlayerState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `state` - Mutable reference to the player state
/// * `clock` - Mutable reference to the playback clock
/// * `duration` - Duration of the lyric sheet
/// * `sheet_rows` - Total rows the lyric sheet occupies
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event(
    event: Event,
    state: &mut PlayerState,
    clock: &mut PlaybackClock,
    duration: f64,
    sheet_rows: usize,
) -> InputResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(key, state, clock, duration, sheet_rows)
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, sheet_rows),
        Event::Resize(cols, rows) => {
            state.handle_resize(cols, rows, sheet_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
