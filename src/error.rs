//! Search engine error types.

use thiserror::Error;

/// Errors raised at the search API boundary.
///
/// Configuration problems (zero skip, empty input, impossible term) are
/// validated before any scanning starts. Failures of individual candidates
/// during a scan, such as a chain that cannot complete from a given start,
/// are folded into the result set instead of raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No letters survived stripping.
    #[error("Text is empty after stripping non-letters")]
    EmptyText,

    /// Term has fewer than two letters after normalization.
    #[error("Term '{term}' has fewer than two letters after normalization")]
    TermTooShort {
        /// The term as supplied by the caller.
        term: String,
    },

    /// Term cannot fit in the stream even at the smallest requested skip.
    #[error("Term of {term_len} letters cannot fit in {text_len} letters at skip {skip}")]
    TermTooLong {
        /// Letters in the normalized term.
        term_len: usize,
        /// The skip at which the fit was checked.
        skip: i64,
        /// Letters in the prepared stream.
        text_len: usize,
    },

    /// Constant skip of zero requested.
    #[error("Constant skip must be non-zero")]
    ZeroSkip,

    /// A constant skip spec without a skip value.
    #[error("Constant skip requires a skip value")]
    MissingSkipValue,

    /// Empty or non-positive skip range.
    #[error("Invalid skip range {min}..={max} (need 0 < min <= max)")]
    InvalidSkipRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// Chain window of zero requested.
    #[error("Chain window must be at least 1")]
    ZeroWindow,

    /// Extraction positions not strictly ascending, or out of bounds.
    #[error("Invalid position at index {index}: positions must be strictly ascending and in bounds")]
    InvalidPositions {
        /// Index of the first offending position.
        index: usize,
    },

    /// Grid factorization of a zero letter count.
    #[error("Cannot factor a letter count of zero")]
    InvalidCount,

    /// Matrix dimensions cannot hold the letter stream.
    #[error("Grid {rows}x{cols} cannot hold {needed} letters")]
    GridTooSmall {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Letters that must fit.
        needed: usize,
    },
}
