// bbkit/src/cli.rs
//! This file defines the command-line interface (CLI) for the bbkit
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "bbkit",
    author = "bbkit contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Transform bracket-tag forum markup into hypertext or plain text",
    long_about = "bbkit is a command-line utility for transforming bracket-tag (BBCode) markup. It renders user-authored forum markup into sanitized hypertext for display, or strips the tags away to produce plain text for excerpting and search indexing, driven by an ordered, declarative rule catalog.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'bbkit' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `bbkit` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders markup from a file or stdin into hypertext.
    #[command(about = "Renders bracket-tag markup from a file or stdin into hypertext.")]
    Render(RenderCommand),

    /// Strips all markup, keeping only the textual content.
    #[command(about = "Strips all bracket tags, keeping only the textual content.")]
    Strip(StripCommand),

    /// Prints the catalog of supported tags.
    #[command(about = "Prints the catalog of supported tags with examples.")]
    Tags,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write transformed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule catalog (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule catalog (YAML).")]
    pub config: Option<PathBuf>,

    /// Match tag keywords case-insensitively ([B] renders like [b]).
    #[arg(long = "case-insensitive", short = 'c', help = "Match tag keywords case-insensitively.")]
    pub case_insensitive: bool,
}

/// Arguments for the `strip` command.
///
/// Strip mode always matches tag keywords case-insensitively, so it exposes
/// no case flag.
#[derive(Parser, Debug)]
pub struct StripCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write transformed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule catalog (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule catalog (YAML).")]
    pub config: Option<PathBuf>,
}
