//! Chain command - greedy nearest-occurrence search.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use elscan::{prepare_text, search_chain_with_control, ChainSearchSummary, ScanControl};

use super::{load_text, CipherArg, CommandExecutor, LetterClassArg};

/// Walk the text taking each term letter at its nearest occurrence.
#[derive(Args, Debug)]
pub struct ChainCommand {
    /// Path to the text file (reads stdin when omitted)
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Term to chain through the text
    #[arg(short = 'm', long)]
    pub term: String,

    /// Largest distance scanned past the cursor for each letter
    #[arg(short, long, default_value = "100")]
    pub window: usize,

    /// Only attempt these start positions (comma-separated); broken chains
    /// are then reported as diagnostics
    #[arg(long, value_delimiter = ',')]
    pub starts: Vec<usize>,

    /// Which characters count as letters
    #[arg(long, value_enum, default_value = "any")]
    pub letters: LetterClassArg,

    /// Valuer for term and segment values
    #[arg(long, value_enum, default_value = "ordinal")]
    pub cipher: CipherArg,

    /// Print the full summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for ChainCommand {
    fn execute(&self) -> Result<()> {
        let raw = load_text(self.text.as_deref())?;
        let prepared = prepare_text(&raw, self.letters.into())?;
        let cipher = self.cipher.build();

        if self.verbose {
            eprintln!(
                "Chaining '{}' through {} letters, window {}",
                self.term,
                prepared.len(),
                self.window
            );
        }

        let starts = if self.starts.is_empty() {
            None
        } else {
            Some(self.starts.as_slice())
        };

        let summary = search_chain_with_control(
            &prepared,
            &self.term,
            self.window,
            starts,
            cipher.as_ref(),
            &mut ScanControl::none(),
        )?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize results")?
            );
        } else {
            print_summary(&summary);
        }

        Ok(())
    }
}

fn print_summary(summary: &ChainSearchSummary) {
    println!(
        "{} chain(s) for '{}' in {} letters",
        summary.results.len(),
        summary.term,
        summary.source_length
    );
    for chain in &summary.results {
        let positions: Vec<usize> = chain.steps.iter().map(|step| step.position).collect();
        println!(
            "  length {:>5}  positions {:?}  intervals {}  value {}",
            chain.total_length, positions, chain.total_interval_sum, chain.total_value
        );
    }
    for diagnostic in &summary.broken {
        println!(
            "  broken at start {}: letter '{}' (index {}) not reachable",
            diagnostic.start_pos, diagnostic.failed_letter, diagnostic.failed_index
        );
    }
}
