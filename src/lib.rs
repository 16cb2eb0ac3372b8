//! lrp - terminal LRC lyrics player
//!
//! Parses the `[mm:ss.xx]lyric` timestamped-lyrics format, tracks a
//! playback clock, and scrolls/highlights the active line in a terminal
//! viewport.
//!
//! The interesting pieces live in [`player::sync`]: the time-to-index
//! lookup and the clamped scroll-offset computation. Everything else is
//! parsing ([`lrc`]) and terminal plumbing ([`player`]).

pub mod cli;
pub mod config;
pub mod lrc;
pub mod player;

pub use config::Config;
pub use lrc::{LrcError, LrcFile, LrcLine, Metadata};
