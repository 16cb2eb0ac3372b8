//! Player state management
//!
//! Contains the central `PlayerState` struct that holds viewport and UI
//! mode state, as well as shared types used across player modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Viewport and UI state for the lyrics player.
///
/// Playback timing lives in [`crate::player::clock::PlaybackClock`]; this
/// struct covers everything the renderer and input handlers share.
#[derive(Debug)]
pub struct PlayerState {
    // === UI modes ===
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether manual scroll mode is active (arrow keys scroll instead of seek)
    pub manual_mode: bool,

    // === Viewport state ===
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Number of visible lyric rows (term_rows - chrome)
    pub view_rows: usize,
    /// Number of visible columns
    pub view_cols: usize,
    /// Vertical scroll offset into the lyric sheet
    pub view_row_offset: usize,
    /// Rows each lyric line occupies (text row + spacing rows)
    pub line_height: usize,

    // === Rendering flags ===
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Number of chrome lines (separator + progress + status bar)
    pub const CHROME_LINES: u16 = 3;

    /// Create a new PlayerState for the given terminal size.
    pub fn new(term_cols: u16, term_rows: u16, line_height: usize) -> Self {
        let view_rows = (term_rows.saturating_sub(Self::CHROME_LINES)) as usize;
        let view_cols = term_cols as usize;

        Self {
            show_help: false,
            manual_mode: false,

            term_cols,
            term_rows,
            view_rows,
            view_cols,
            view_row_offset: 0,
            line_height: line_height.max(1),

            needs_render: true,
        }
    }

    /// Handle terminal resize: update viewport dimensions and clamp the
    /// scroll offset to the valid range for `sheet_rows`.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16, sheet_rows: usize) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.view_rows = (new_rows.saturating_sub(Self::CHROME_LINES)) as usize;
        self.view_cols = new_cols as usize;

        let max_offset = sheet_rows.saturating_sub(self.view_rows);
        self.view_row_offset = self.view_row_offset.min(max_offset);

        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Toggle manual scroll mode. Leaving manual mode hands the scroll
    /// offset back to the auto-centering logic.
    pub fn toggle_manual_mode(&mut self) {
        self.manual_mode = !self.manual_mode;
        self.needs_render = true;
    }

    /// Scroll up one row in manual mode.
    pub fn scroll_up(&mut self) {
        self.view_row_offset = self.view_row_offset.saturating_sub(1);
        self.needs_render = true;
    }

    /// Scroll down one row in manual mode, clamped to the sheet size.
    pub fn scroll_down(&mut self, sheet_rows: usize) {
        let max_offset = sheet_rows.saturating_sub(self.view_rows);
        self.view_row_offset = (self.view_row_offset + 1).min(max_offset);
        self.needs_render = true;
    }

    /// Exit manual mode if active. Returns true if a mode was exited,
    /// false if the caller should quit.
    pub fn exit_mode_or_quit(&mut self) -> bool {
        if self.manual_mode {
            self.manual_mode = false;
            self.needs_render = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlayerState::new(80, 27, 2);

        assert!(!state.show_help);
        assert!(!state.manual_mode);
        assert_eq!(state.view_rows, 24); // 27 - 3 chrome lines
        assert_eq!(state.view_cols, 80);
        assert_eq!(state.view_row_offset, 0);
        assert_eq!(state.line_height, 2);
        assert!(state.needs_render);
    }

    #[test]
    fn line_height_is_at_least_one() {
        let state = PlayerState::new(80, 27, 0);
        assert_eq!(state.line_height, 1);
    }

    #[test]
    fn handle_resize_updates_dimensions() {
        let mut state = PlayerState::new(80, 27, 2);
        state.handle_resize(120, 40, 200);

        assert_eq!(state.term_cols, 120);
        assert_eq!(state.term_rows, 40);
        assert_eq!(state.view_rows, 37); // 40 - 3
        assert_eq!(state.view_cols, 120);
    }

    #[test]
    fn handle_resize_clamps_offset() {
        let mut state = PlayerState::new(80, 27, 2);
        state.view_row_offset = 100;

        state.handle_resize(80, 27, 30);

        // max offset = 30 - 24 = 6
        assert_eq!(state.view_row_offset, 6);
    }

    #[test]
    fn handle_resize_on_tiny_terminal() {
        let mut state = PlayerState::new(80, 27, 2);
        state.handle_resize(20, 2, 30);
        assert_eq!(state.view_rows, 0);
        assert_eq!(state.view_row_offset, 0);
    }

    #[test]
    fn scroll_up_saturates_at_zero() {
        let mut state = PlayerState::new(80, 27, 2);
        state.scroll_up();
        assert_eq!(state.view_row_offset, 0);
    }

    #[test]
    fn scroll_down_clamps_to_sheet() {
        let mut state = PlayerState::new(80, 27, 2);
        for _ in 0..100 {
            state.scroll_down(30);
        }
        assert_eq!(state.view_row_offset, 6); // 30 - 24
    }

    #[test]
    fn scroll_down_noop_when_sheet_fits() {
        let mut state = PlayerState::new(80, 27, 2);
        state.scroll_down(10);
        assert_eq!(state.view_row_offset, 0);
    }

    #[test]
    fn toggle_manual_mode_flips_flag() {
        let mut state = PlayerState::new(80, 27, 2);
        state.toggle_manual_mode();
        assert!(state.manual_mode);
        state.toggle_manual_mode();
        assert!(!state.manual_mode);
    }

    #[test]
    fn exit_mode_exits_manual_first() {
        let mut state = PlayerState::new(80, 27, 2);
        state.manual_mode = true;

        assert!(state.exit_mode_or_quit());
        assert!(!state.manual_mode);
    }

    #[test]
    fn exit_mode_returns_false_when_no_mode() {
        let mut state = PlayerState::new(80, 27, 2);
        assert!(!state.exit_mode_or_quit()); // Should quit
    }
}
