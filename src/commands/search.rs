//! Search command - constant-skip scan over a skip range.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use elscan::{
    prepare_text, search_els_with_control, Direction, ElsSearchSummary, ScanControl, ScanProgress,
};

use super::{load_text, CipherArg, CommandExecutor, LetterClassArg};

/// Search a term at every skip in a range.
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Path to the text file (reads stdin when omitted)
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Term to search for
    #[arg(short = 'm', long)]
    pub term: String,

    /// Smallest skip to try
    #[arg(long, default_value = "2")]
    pub min_skip: i64,

    /// Largest skip to try
    #[arg(long, default_value = "50")]
    pub max_skip: i64,

    /// Scan right-to-left (negative skips)
    #[arg(short, long)]
    pub backward: bool,

    /// Which characters count as letters
    #[arg(long, value_enum, default_value = "any")]
    pub letters: LetterClassArg,

    /// Valuer for term and segment values
    #[arg(long, value_enum, default_value = "ordinal")]
    pub cipher: CipherArg,

    /// Print the full summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output (per-skip progress on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for SearchCommand {
    fn execute(&self) -> Result<()> {
        let raw = load_text(self.text.as_deref())?;
        let prepared = prepare_text(&raw, self.letters.into())?;

        if self.verbose {
            eprintln!(
                "Prepared {} letters from {} characters",
                prepared.len(),
                raw.chars().count()
            );
        }

        let cipher = self.cipher.build();
        let direction = if self.backward {
            Direction::Backward
        } else {
            Direction::Forward
        };

        let mut report = |p: ScanProgress| eprintln!("Scanned skip {}/{}", p.completed, p.total);
        let mut control = ScanControl::none();
        if self.verbose {
            control.progress = Some(&mut report);
        }

        let summary = search_els_with_control(
            &prepared,
            &self.term,
            self.min_skip,
            self.max_skip,
            direction,
            cipher.as_ref(),
            &mut control,
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

fn print_summary(summary: &ElsSearchSummary) {
    println!(
        "{} match(es) for '{}' in {} letters",
        summary.results.len(),
        summary.term,
        summary.source_length
    );
    for hit in &summary.results {
        println!(
            "  skip {:>5}  start {:>6}  positions {:?}  term value {}  segments value {}",
            hit.skip, hit.start_pos, hit.letter_positions, hit.term_value, hit.skip_value_sum
        );
    }
}
