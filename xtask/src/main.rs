//! Build automation tasks for lrp.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use lrp::cli::Cli as LrpCli;

#[derive(Parser)]
#[command(about = "Build tasks for the lrp workspace")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/man
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let xtask = Xtask::parse();

    match xtask.task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let cmd = LrpCli::command();
    let mut buffer = Vec::new();
    Man::new(cmd.clone())
        .render(&mut buffer)
        .context("Failed to render man page")?;

    let path = out_dir.join("lrp.1");
    fs::write(&path, &buffer)
        .with_context(|| format!("Failed to write man page: {}", path.display()))?;
    println!("Wrote {}", path.display());

    // One page per subcommand
    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let mut buffer = Vec::new();
        Man::new(sub.clone())
            .title(format!("lrp-{}", sub.get_name()))
            .render(&mut buffer)
            .with_context(|| format!("Failed to render man page for {}", sub.get_name()))?;

        let path = out_dir.join(format!("lrp-{}.1", sub.get_name()));
        fs::write(&path, &buffer)
            .with_context(|| format!("Failed to write man page: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
