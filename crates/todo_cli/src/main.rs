//! CLI entry point for todo.tui.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    config::load_env();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
