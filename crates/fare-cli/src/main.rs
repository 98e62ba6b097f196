//! Chauffeur fare quotes
//!
//! A CLI tool that prices point-to-point and hourly chauffeur bookings.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
