//! List column identifiers.

use anyhow::Result;
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;
use tactics_core::StatType;

/// List every column identifier
#[derive(Parser)]
pub struct Columns {
    /// Only list sortable columns
    #[arg(long)]
    sortable: bool,
}

impl Columns {
    pub fn execute(self) -> Result<()> {
        println!(
            "{:<24} {:<14} {:<8} {}",
            style("ID").bold().cyan(),
            style("Label").bold().cyan(),
            style("Align").bold().cyan(),
            style("Sortable").bold().cyan()
        );
        for stat_type in StatType::iter() {
            let column_style = stat_type.style();
            if self.sortable && !column_style.sortable {
                continue;
            }
            println!(
                "{:<24} {:<14} {:<8} {}",
                stat_type.as_ref(),
                stat_type.label(),
                format!("{:?}", column_style.align),
                if column_style.sortable { "yes" } else { "no" }
            );
        }
        Ok(())
    }
}
