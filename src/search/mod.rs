//! Search strategies over a prepared letter stream.
//!
//! This module provides:
//! - Constant-skip equidistant search, forward and backward
//! - Derived-progression search (triangular, square, Fibonacci offsets)
//! - Greedy nearest-occurrence chain search with a bounded window
//! - Cooperative cancellation and progress reporting for long scans

pub mod chain;
pub mod control;
pub mod els;
pub mod sequence;

pub use chain::{
    search_chain, search_chain_with_control, ChainBroken, ChainResult, ChainSearchSummary,
    ChainStep,
};
pub use control::{ScanControl, ScanProgress};
pub use els::{
    extract_intervening_letters, search_els, search_els_with_control, search_sequence,
    search_sequence_with_control, search_with_spec, Direction, ElsInterveningSegment, ElsResult,
    ElsSearchSummary,
};
pub use sequence::{
    constant, fibonacci, offsets_for, square, triangular, SequenceKind, SkipMode, SkipSpec,
};
