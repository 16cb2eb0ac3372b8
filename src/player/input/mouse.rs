//! Mouse input handling for the lyrics player.
//!
//! The scroll wheel drives the lyric sheet directly. Wheeling while in
//! synced mode switches to manual scroll mode first, so the viewport
//! does not snap back on the next tick.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::player::state::{InputResult, PlayerState};

/// Handle a mouse event.
///
/// # Arguments
/// * `event` - The mouse event
/// * `state` - Mutable reference to the player state
/// * `sheet_rows` - Total rows the lyric sheet occupies
pub fn handle_mouse_event(
    event: MouseEvent,
    state: &mut PlayerState,
    sheet_rows: usize,
) -> InputResult {
    match event.kind {
        MouseEventKind::ScrollUp => {
            if !state.manual_mode {
                state.toggle_manual_mode();
            }
            state.scroll_up();
        }
        MouseEventKind::ScrollDown => {
            if !state.manual_mode {
                state.toggle_manual_mode();
            }
            state.scroll_down(sheet_rows);
        }
        _ => {}
    }
    InputResult::Continue
}
