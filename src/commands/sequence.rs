//! Sequence command - search along a derived progression.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use elscan::{
    prepare_text, search_sequence_with_control, ScanControl, ScanProgress, SequenceKind,
};

use super::{load_text, CipherArg, CommandExecutor, LetterClassArg};

/// Progressions selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SequenceKindArg {
    /// Offsets 0, 1, 3, 6, 10, ...
    Triangular,
    /// Offsets 0, 1, 4, 9, 16, ...
    Square,
    /// Offsets 0, 1, 2, 4, 7, 12, ...
    Fibonacci,
}

impl From<SequenceKindArg> for SequenceKind {
    fn from(arg: SequenceKindArg) -> Self {
        match arg {
            SequenceKindArg::Triangular => SequenceKind::Triangular,
            SequenceKindArg::Square => SequenceKind::Square,
            SequenceKindArg::Fibonacci => SequenceKind::Fibonacci,
        }
    }
}

/// Search a term with letter offsets drawn from a derived progression.
#[derive(Args, Debug)]
pub struct SequenceCommand {
    /// Path to the text file (reads stdin when omitted)
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Term to search for
    #[arg(short = 'm', long)]
    pub term: String,

    /// Which progression to apply
    #[arg(short, long, value_enum)]
    pub kind: SequenceKindArg,

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

impl CommandExecutor for SequenceCommand {
    fn execute(&self) -> Result<()> {
        let raw = load_text(self.text.as_deref())?;
        let prepared = prepare_text(&raw, self.letters.into())?;
        let cipher = self.cipher.build();

        let mut last_percent = 0;
        let mut report = |p: ScanProgress| {
            let percent = p.completed * 100 / p.total.max(1);
            if percent >= last_percent + 10 {
                last_percent = percent;
                eprintln!("Scanned {percent}% of start positions");
            }
        };
        let mut control = ScanControl::none();
        if self.verbose {
            control.progress = Some(&mut report);
        }

        let summary = search_sequence_with_control(
            &prepared,
            &self.term,
            SequenceKind::from(self.kind),
            cipher.as_ref(),
            &mut control,
        )?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize results")?
            );
        } else {
            println!(
                "{} match(es) for '{}' ({:?} offsets) in {} letters",
                summary.results.len(),
                summary.term,
                self.kind,
                summary.source_length
            );
            for hit in &summary.results {
                println!(
                    "  start {:>6}  positions {:?}  term value {}",
                    hit.start_pos, hit.letter_positions, hit.term_value
                );
            }
        }

        Ok(())
    }
}
