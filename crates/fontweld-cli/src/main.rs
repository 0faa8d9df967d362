//! Fontweld CLI - command-line front end for the fontweld pipelines
//!
//! A thin adapter: subcommands trigger the pipelines in fontweld-forge
//! and fontweld-markup, and the console reporter renders their event
//! stream. Every failure is scoped to the triggered action and exits
//! with code 1; nothing here panics.

mod cli;
mod commands;
mod console;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Info => commands::info::run(),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Tags(args) => commands::tags::run(args),
        Commands::Apply(args) => commands::apply::run(args),
    };

    if let Err(err) = result {
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}
