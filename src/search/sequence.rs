//! Skip-sequence generators.
//!
//! Pure functions producing ascending offset sequences, independent of any
//! particular text. The searcher applies them relative to a candidate start
//! position; offset `0` is always the start itself.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A derived progression selecting a generator for sequence search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceKind {
    /// Triangular numbers: 0, 1, 3, 6, 10, ...
    Triangular,
    /// Squares: 0, 1, 4, 9, 16, ...
    Square,
    /// Cumulative Fibonacci: 0, 1, 2, 4, 7, 12, 20, ...
    Fibonacci,
}

/// How the interval between term letters is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipMode {
    /// One fixed interval.
    Constant,
    /// Triangular progression.
    Triangular,
    /// Square progression.
    Square,
    /// Cumulative Fibonacci progression.
    Fibonacci,
}

impl SkipMode {
    /// The derived progression for this mode, None for `Constant`.
    pub fn sequence_kind(&self) -> Option<SequenceKind> {
        match self {
            SkipMode::Constant => None,
            SkipMode::Triangular => Some(SequenceKind::Triangular),
            SkipMode::Square => Some(SequenceKind::Square),
            SkipMode::Fibonacci => Some(SequenceKind::Fibonacci),
        }
    }
}

/// A skip specification: the mode plus, for `Constant`, the skip itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipSpec {
    /// How intervals are chosen.
    pub mode: SkipMode,
    /// Required (and non-zero) only for `Constant`. Negative values scan
    /// backward.
    pub skip_value: Option<i64>,
}

impl SkipSpec {
    /// A constant-interval spec.
    pub fn constant(skip: i64) -> Self {
        Self {
            mode: SkipMode::Constant,
            skip_value: Some(skip),
        }
    }

    /// A derived-progression spec.
    pub fn derived(kind: SequenceKind) -> Self {
        let mode = match kind {
            SequenceKind::Triangular => SkipMode::Triangular,
            SequenceKind::Square => SkipMode::Square,
            SequenceKind::Fibonacci => SkipMode::Fibonacci,
        };
        Self {
            mode,
            skip_value: None,
        }
    }

    /// Checks the spec before a scan starts: `Constant` needs a non-zero
    /// skip value, derived modes must not carry one.
    pub fn validate(&self) -> Result<(), SearchError> {
        match (self.mode, self.skip_value) {
            (SkipMode::Constant, None) => Err(SearchError::MissingSkipValue),
            (SkipMode::Constant, Some(0)) => Err(SearchError::ZeroSkip),
            _ => Ok(()),
        }
    }
}

/// Constant offsets: `0, skip, 2*skip, ...`
pub fn constant(skip: usize, count: usize) -> Vec<usize> {
    (0..count).map(|i| i.saturating_mul(skip)).collect()
}

/// Triangular offsets: `offset_i = i * (i + 1) / 2`.
pub fn triangular(count: usize) -> Vec<usize> {
    (0..count).map(|i| i * (i + 1) / 2).collect()
}

/// Square offsets: `offset_i = i * i`.
pub fn square(count: usize) -> Vec<usize> {
    (0..count).map(|i| i * i).collect()
}

/// Cumulative Fibonacci offsets.
///
/// The deltas between consecutive offsets follow the Fibonacci seed
/// `1, 1, 2, 3, 5, ...`; each offset is the running sum so far, giving
/// `0, 1, 2, 4, 7, 12, 20, ...`. Saturates rather than overflowing on
/// pathological counts.
pub fn fibonacci(count: usize) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(count);
    let (mut a, mut b): (usize, usize) = (1, 1);
    let mut total = 0usize;

    for _ in 0..count {
        offsets.push(total);
        total = total.saturating_add(a);
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }

    offsets
}

/// Offsets for `kind`, `count` letters.
pub fn offsets_for(kind: SequenceKind, count: usize) -> Vec<usize> {
    match kind {
        SequenceKind::Triangular => triangular(count),
        SequenceKind::Square => square(count),
        SequenceKind::Fibonacci => fibonacci(count),
    }
}
