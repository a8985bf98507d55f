//! Elscan - skip-code search over plain text.
//!
//! A CLI host for the search engine: reads a text, runs an equidistant,
//! derived-progression or chain search, and prints the results.

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ChainCommand, CommandExecutor, GridCommand, SearchCommand, SequenceCommand};

mod commands;

/// Elscan - equidistant and chained letter-sequence search
#[derive(Parser)]
#[command(name = "elscan")]
#[command(version = "0.1.0")]
#[command(about = "Equidistant and chained letter-sequence search over plain text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a term at every skip in a range
    Search(SearchCommand),
    /// Search a term along a derived progression of offsets
    Sequence(SequenceCommand),
    /// Walk a term through the text at nearest occurrences
    Chain(ChainCommand),
    /// Show the near-square grid layout for a text
    Grid(GridCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(cmd) => cmd.execute(),
        Commands::Sequence(cmd) => cmd.execute(),
        Commands::Chain(cmd) => cmd.execute(),
        Commands::Grid(cmd) => cmd.execute(),
    }
}
