//! Command-line interface for Sumi stroke rendering
//!
//! This crate provides the `sumi` binary. The library half holds the
//! argument definitions and command runners so they can be tested without
//! spawning a process.

pub mod cli;
pub mod commands;

use cli::{Cli, Commands};

/// Run a parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Path(args) => commands::path::run(args),
    }
}
