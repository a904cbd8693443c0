// bbkit/src/commands/transform.rs
//! Implements the `render` and `strip` commands: load the rule catalog, read
//! the input, run the engine once, write the result. All transformation
//! logic lives in `bbkit-core`; this module is plumbing only.
//! License: MIT OR Apache-2.0

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use bbkit_core::{
    headless_render_string, headless_strip_string, CaseMatching, MarkupConfig,
};

use crate::cli::{RenderCommand, StripCommand};

fn load_catalog(config_path: Option<&Path>) -> Result<MarkupConfig> {
    match config_path {
        Some(path) => MarkupConfig::load_from_file(path),
        None => MarkupConfig::load_default_rules(),
    }
}

fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output_file: Option<&Path>, content: &str) -> Result<()> {
    match output_file {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// Runs the `render` command.
pub fn run_render(args: &RenderCommand) -> Result<()> {
    let config = load_catalog(args.config.as_deref())?;
    let source = read_input(args.input_file.as_deref())?;
    let case = if args.case_insensitive {
        CaseMatching::Insensitive
    } else {
        CaseMatching::Sensitive
    };
    debug!("Rendering {} bytes of markup ({case:?}).", source.len());
    let rendered = headless_render_string(config, &source, case)?;
    write_output(args.output.as_deref(), &rendered)
}

/// Runs the `strip` command.
pub fn run_strip(args: &StripCommand) -> Result<()> {
    let config = load_catalog(args.config.as_deref())?;
    let source = read_input(args.input_file.as_deref())?;
    debug!("Stripping {} bytes of markup.", source.len());
    let stripped = headless_strip_string(config, &source)?;
    write_output(args.output.as_deref(), &stripped)
}
