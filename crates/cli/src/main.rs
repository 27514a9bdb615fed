//! Command-line browser for the unit database.
//!
//! Run with: `tactics table --view in-battle --category damage --sort damage_dealt`

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Columns, Table};
use config::CliConfig;

/// Browse unit stats and buffs as filterable, sortable tables
#[derive(Parser)]
#[command(name = "tactics")]
#[command(about = "Unit database tables", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print a filtered and sorted table
    Table(Table),

    /// List every column identifier with its label and style
    Columns(Columns),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TACTICS_DATA_DIR)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Table(cmd) => cmd.execute(&config),
        Command::Columns(cmd) => cmd.execute(),
    }
}
