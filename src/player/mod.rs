//! Terminal lyrics player module
//!
//! Drives the synced display: a playback clock stands in for the audio
//! position, and every tick maps the current time to a lyric line and a
//! viewport scroll offset.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `sync`: highlight-index lookup and scroll-offset computation
//! - `clock`: the playback clock (pause, seek, speed)
//! - `state`: PlayerState struct and shared types (InputResult)
//! - `input/`: keyboard and mouse input handling
//! - `render/`: UI rendering (viewport, progress bar, status bar, help)
//!
//! # Usage
//!
//! ```no_run
//! use lrp::player::{play_file, PlayOptions, PlaybackResult};
//! use std::path::Path;
//!
//! let result = play_file(Path::new("song.lrc"), &PlayOptions::default()).unwrap();
//! match result {
//!     PlaybackResult::Completed => println!("Reached the end"),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod clock;
pub(crate) mod input;
mod native;
pub mod render;
pub mod state;
pub mod sync;

pub use clock::PlaybackClock;
pub use native::{play_file, PlayOptions, PlaybackResult};
pub use state::{InputResult, PlayerState};
pub use sync::{highlight_index, scroll_offset};
