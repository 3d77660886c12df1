use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

/// Status for a failed run, distinct from "values differ" (1).
const ERROR_STATUS: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match commands::run_command(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(ERROR_STATUS)
        }
    }
}
