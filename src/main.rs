//! lrp binary entry point.

mod commands;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use lrp::cli::{Cli, Command, ConfigAction};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Play {
            file,
            from,
            speed,
            no_offset,
        } => commands::play::handle(&file, from.as_deref(), speed, no_offset),
        Command::Info { file, json } => commands::info::handle(&file, json),
        Command::Shift {
            file,
            delta,
            output,
        } => commands::shift::handle(&file, &delta, output.as_deref()),
        Command::Completions { shell } => {
            generate(shell, &mut Cli::command(), "lrp", &mut io::stdout());
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
