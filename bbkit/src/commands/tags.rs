// bbkit/src/commands/tags.rs
//! Implements the `tags` command: print the capability catalog as a table
//! for a quick tag reference in the terminal.
//! License: MIT OR Apache-2.0

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use bbkit_core::usable_tags;

/// Runs the `tags` command.
pub fn run_tags() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tag", "Description", "Example"]);

    for tag in usable_tags() {
        table.add_row(vec![tag.title, tag.description.unwrap_or(""), tag.example]);
    }

    println!("{table}");
    Ok(())
}
