// bbkit/src/main.rs
//! bbkit entry point.
//!
//! Parses the CLI, configures logging, and dispatches to the command
//! implementations. All markup transformation lives in `bbkit-core`.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};

fn init_logger(args: &Cli) {
    let mut builder = env_logger::Builder::from_default_env();
    if args.quiet {
        builder.filter_level(LevelFilter::Off);
    } else if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    // Logs go to stderr so they never mix with transformed output on stdout.
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(&args);

    match &args.command {
        Commands::Render(cmd) => commands::transform::run_render(cmd),
        Commands::Strip(cmd) => commands::transform::run_strip(cmd),
        Commands::Tags => commands::tags::run_tags(),
    }
}
