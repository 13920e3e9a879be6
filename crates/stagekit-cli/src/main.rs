//! Stagekit CLI - Command-line utility for staging and packaging CI build
//! artifacts.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Copy(args) => commands::copy::execute(args, &*formatter),
        cli::Commands::Pack(args) => commands::pack::execute(args, &*formatter),
    }
}
