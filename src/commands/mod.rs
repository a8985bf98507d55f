//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. The CLI is a host application: it owns file reading and cipher
//! selection, and the engine stays I/O-free.

mod chain;
mod grid;
mod search;
mod sequence;

pub use chain::ChainCommand;
pub use grid::GridCommand;
pub use search::SearchCommand;
pub use sequence::SequenceCommand;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use elscan::{Cipher, HebrewGematria, LetterClass, NullCipher, OrdinalCipher};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this trait
/// to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Letter classes selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LetterClassArg {
    /// Any Unicode alphabetic character
    Any,
    /// ASCII letters only
    Latin,
    /// The Hebrew letter block
    Hebrew,
}

impl From<LetterClassArg> for LetterClass {
    fn from(arg: LetterClassArg) -> Self {
        match arg {
            LetterClassArg::Any => LetterClass::Alphabetic,
            LetterClassArg::Latin => LetterClass::Latin,
            LetterClassArg::Hebrew => LetterClass::Hebrew,
        }
    }
}

/// Bundled ciphers selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CipherArg {
    /// Alphabetic ordinals, a=1 through z=26
    Ordinal,
    /// Standard Hebrew gematria values
    Hebrew,
    /// Every letter valued at zero
    Null,
}

impl CipherArg {
    /// Builds the selected valuer.
    pub fn build(&self) -> Box<dyn Cipher> {
        match self {
            CipherArg::Ordinal => Box::new(OrdinalCipher),
            CipherArg::Hebrew => Box::new(HebrewGematria),
            CipherArg::Null => Box::new(NullCipher),
        }
    }
}

/// Reads the text to search from a file, or stdin when no path is given.
pub fn load_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carrier.txt");
        std::fs::write(&path, "In the beginning").unwrap();

        let text = load_text(Some(&path)).unwrap();
        assert_eq!(text, "In the beginning");
    }

    #[test]
    fn test_load_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(load_text(Some(&path)).is_err());
    }

    #[test]
    fn test_letter_class_mapping() {
        assert_eq!(LetterClass::from(LetterClassArg::Any), LetterClass::Alphabetic);
        assert_eq!(LetterClass::from(LetterClassArg::Hebrew), LetterClass::Hebrew);
    }

    #[test]
    fn test_cipher_arg_builds() {
        assert_eq!(CipherArg::Ordinal.build().calculate("abc"), 6);
        assert_eq!(CipherArg::Null.build().calculate("abc"), 0);
    }
}
