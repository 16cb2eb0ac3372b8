//! Command-line interface definitions.
//!
//! Kept in the library so the `xtask` man-page generator can reuse the
//! same clap `Command` tree.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Terminal LRC lyrics player.
#[derive(Debug, Parser)]
#[command(name = "lrp", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a lyrics file, scrolling in sync with the playback clock
    Play {
        /// Path to the .lrc file
        file: PathBuf,

        /// Start position (mm:ss.xx or seconds)
        #[arg(long, value_name = "TIME")]
        from: Option<String>,

        /// Playback speed multiplier (overrides the config)
        #[arg(long)]
        speed: Option<f64>,

        /// Ignore the [offset:] tag in the file
        #[arg(long)]
        no_offset: bool,
    },

    /// Show metadata and timing statistics for a lyrics file
    Info {
        /// Path to the .lrc file
        file: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Shift every timestamp by a signed amount and write the result
    Shift {
        /// Path to the .lrc file
        file: PathBuf,

        /// Amount to shift by (mm:ss.xx or seconds, optionally signed)
        #[arg(allow_hyphen_values = true)]
        delta: String,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
