//! Grid command - factorization, layout suggestions, matrix display.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use elscan::{build_matrix, get_grid_factors, prepare_text, suggest_better_counts};

use super::{load_text, CommandExecutor, LetterClassArg};

/// Show the near-square grid layout for a text (or a bare letter count).
#[derive(Args, Debug)]
pub struct GridCommand {
    /// Path to the text file (reads stdin when omitted)
    #[arg(short, long, conflicts_with = "count")]
    pub text: Option<PathBuf>,

    /// Factor this letter count instead of reading a text
    #[arg(short, long)]
    pub count: Option<usize>,

    /// How far around the count to look for better-shaped layouts
    #[arg(long, default_value = "3")]
    pub tolerance: usize,

    /// Print the arranged matrix (text input only)
    #[arg(short, long, conflicts_with = "count")]
    pub show: bool,

    /// Which characters count as letters
    #[arg(long, value_enum, default_value = "any")]
    pub letters: LetterClassArg,

    /// Print factors and suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for GridCommand {
    fn execute(&self) -> Result<()> {
        let prepared = match self.count {
            Some(_) => None,
            None => {
                let raw = load_text(self.text.as_deref())?;
                Some(prepare_text(&raw, self.letters.into())?)
            }
        };

        let count = match (self.count, &prepared) {
            (Some(count), _) => count,
            (None, Some(prepared)) => prepared.len(),
            (None, None) => unreachable!("either count or text is present"),
        };

        let factors = get_grid_factors(count)?;
        let suggestions = suggest_better_counts(count, self.tolerance);

        if self.json {
            let value = serde_json::json!({
                "count": count,
                "factors": factors,
                "suggestions": suggestions,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("Failed to serialize layout")?
            );
        } else {
            println!("{} letters arrange as {} x {}", count, factors.rows, factors.cols);
            if !factors.ideal {
                println!("  (prime count: single-row layout only)");
            }
            if !suggestions.is_empty() {
                println!("  nearby counts with tighter shapes: {suggestions:?}");
            }
        }

        if self.show {
            if let Some(prepared) = &prepared {
                let grid = build_matrix(prepared, factors.rows, factors.cols)?;
                for r in 0..grid.rows() {
                    if let Some(row) = grid.row(r) {
                        println!("{}", row.iter().collect::<String>());
                    }
                }
            }
        }

        Ok(())
    }
}
