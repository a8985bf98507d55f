//! # Elscan - skip-code search over plain text
//!
//! Elscan finds occurrences of a term whose letters appear in a larger text
//! at a constant interval ("equidistant letter sequences"), at intervals
//! following a derived progression (triangular, square, Fibonacci), or along
//! a greedily-chosen nearest-occurrence path (chain search).
//!
//! ## Overview
//!
//! Searches never run against raw input. Text is first **prepared**: every
//! character outside a configured letter class is stripped, leaving a
//! letter-only stream with a map back to original offsets. All searching is
//! case-insensitive and deterministic.
//!
//! - Constant-skip search scans a whole skip range, forward or backward
//! - Derived-progression search applies generated offsets to each start
//! - Chain search walks the text taking each letter at its nearest
//!   occurrence within a bounded window
//! - Grid factorization arranges the stream near-square for display
//!
//! Letter valuation (gematria and friends) is never computed here: every
//! value in a result comes from a [`Cipher`] the host injects. Long scans
//! accept a [`ScanControl`] for cooperative cancellation and progress.
//!
//! ## Example
//!
//! ```rust
//! use elscan::{prepare_text, search_els, Direction, LetterClass, NullCipher};
//!
//! let prepared = prepare_text("ABCABCABC", LetterClass::Latin).unwrap();
//! let summary = search_els(&prepared, "AAA", 3, 3, Direction::Forward, &NullCipher).unwrap();
//!
//! assert_eq!(summary.results.len(), 1);
//! assert_eq!(summary.results[0].letter_positions, vec![0, 3, 6]);
//! ```
//!
//! ## Modules
//!
//! - [`text`]: preparation and the bounded prepared-text cache
//! - [`search`]: equidistant, derived-progression and chain searchers
//! - [`grid`]: near-square factorization and matrix layout
//! - [`cipher`]: the valuation interface and bundled valuers
//! - [`error`]: the boundary error taxonomy

pub mod cipher;
pub mod error;
pub mod grid;
pub mod search;
pub mod text;

// Re-export commonly used types at the crate root
pub use cipher::{Cipher, HebrewGematria, NullCipher, OrdinalCipher};
pub use error::SearchError;
pub use grid::{build_matrix, get_grid_factors, suggest_better_counts, GridFactors, LetterGrid, PAD_CHAR};
pub use search::{
    constant, extract_intervening_letters, fibonacci, offsets_for, search_chain,
    search_chain_with_control, search_els, search_els_with_control, search_sequence,
    search_sequence_with_control, search_with_spec, square, triangular, ChainBroken, ChainResult,
    ChainSearchSummary, ChainStep, Direction, ElsInterveningSegment, ElsResult, ElsSearchSummary,
    ScanControl, ScanProgress, SequenceKind, SkipMode, SkipSpec,
};
pub use text::{normalize_term, prepare_text, LetterClass, PreparedText, PreparedTextCache, DEFAULT_CACHE_CAPACITY};
