//! Greedy nearest-occurrence chain search.
//!
//! Where the equidistant scanner demands one interval for the whole term,
//! a chain walks the stream taking each term letter at its nearest
//! occurrence after the cursor, as long as it sits within a bounded
//! window. A chain that cannot place its next letter simply fails for that
//! start; no chain is an expected, common outcome, so failure is data
//! rather than an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cipher::Cipher;
use crate::error::SearchError;
use crate::search::control::ScanControl;
use crate::text::prepare::{normalize_term, PreparedText};

/// One placed letter in a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    /// The placed letter, original case.
    pub letter: char,
    /// Stream position where it was placed.
    pub position: usize,
    /// Distance scanned from the cursor to reach it.
    pub interval: usize,
    /// Letters between the cursor and the placed letter, original case.
    pub intervening_letters: String,
    /// Cipher value of `intervening_letters`.
    pub intervening_value: i64,
}

/// A completed chain through the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainResult {
    /// The term as the caller supplied it.
    pub term: String,
    /// One step per term letter, positions strictly increasing.
    pub steps: Vec<ChainStep>,
    /// Distance from the first placed letter to the last.
    pub total_length: usize,
    /// Sum of every step's interval.
    pub total_interval_sum: usize,
    /// Term value plus every step's intervening value.
    pub total_value: i64,
}

/// Diagnostic for a chain that could not place its next letter within the
/// window. Data, not an error: emitted only for explicitly requested
/// starts, where the caller wants to know where the walk broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBroken {
    /// The start position whose walk broke.
    pub start_pos: usize,
    /// Index into the term of the letter that could not be placed.
    pub failed_index: usize,
    /// The letter that could not be placed (normalized form).
    pub failed_letter: char,
    /// Steps completed before the break.
    pub steps: Vec<ChainStep>,
}

/// Everything found for one term across all attempted starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSearchSummary {
    /// The term as the caller supplied it.
    pub term: String,
    /// Completed chains, tightest first.
    pub results: Vec<ChainResult>,
    /// Broken-chain diagnostics; populated only when the caller supplied
    /// explicit start positions.
    pub broken: Vec<ChainBroken>,
    /// Letters in the searched stream.
    pub source_length: usize,
}

/// Chain-searches `term` from every position (or from `start_positions`
/// when supplied).
///
/// Chains reached from different starts that place their first letter at
/// the same position are identical from there on and are deduplicated.
/// Results come back ordered by ascending `total_length`, tightest chains
/// first.
pub fn search_chain(
    prepared: &PreparedText,
    term: &str,
    max_window: usize,
    start_positions: Option<&[usize]>,
    cipher: &dyn Cipher,
) -> Result<ChainSearchSummary, SearchError> {
    search_chain_with_control(
        prepared,
        term,
        max_window,
        start_positions,
        cipher,
        &mut ScanControl::none(),
    )
}

/// [`search_chain`] with cancellation and progress hooks, checked once per
/// start position. A cancelled scan returns the chains accumulated so far.
pub fn search_chain_with_control(
    prepared: &PreparedText,
    term: &str,
    max_window: usize,
    start_positions: Option<&[usize]>,
    cipher: &dyn Cipher,
    control: &mut ScanControl<'_>,
) -> Result<ChainSearchSummary, SearchError> {
    if max_window == 0 {
        return Err(SearchError::ZeroWindow);
    }

    let folded_term = normalize_term(term, prepared.letter_class())?;
    let len = prepared.len();

    let explicit = start_positions.is_some();
    let starts: Vec<usize> = match start_positions {
        Some(set) => set.iter().copied().filter(|&pos| pos < len).collect(),
        None => (0..len).collect(),
    };

    let total = starts.len();
    let mut results: Vec<ChainResult> = Vec::new();
    let mut broken = Vec::new();
    let mut seen_first = HashSet::new();

    for (done, &start) in starts.iter().enumerate() {
        if control.is_cancelled() {
            break;
        }

        match walk_chain(prepared, &folded_term, start, max_window, cipher) {
            ChainWalk::Complete(steps) => {
                if seen_first.insert(steps[0].position) {
                    results.push(build_result(term, steps, cipher));
                }
            }
            ChainWalk::Broken {
                failed_index,
                failed_letter,
                steps,
            } => {
                if explicit {
                    broken.push(ChainBroken {
                        start_pos: start,
                        failed_index,
                        failed_letter,
                        steps,
                    });
                }
            }
        }

        control.report(done + 1, total);
    }

    results.sort_by_key(|chain| (chain.total_length, chain.steps[0].position));

    Ok(ChainSearchSummary {
        term: term.to_string(),
        results,
        broken,
        source_length: len,
    })
}

enum ChainWalk {
    Complete(Vec<ChainStep>),
    Broken {
        failed_index: usize,
        failed_letter: char,
        steps: Vec<ChainStep>,
    },
}

/// Walks one chain: for each term letter, take the nearest occurrence at
/// or after the cursor within the window, then move the cursor past it.
fn walk_chain(
    prepared: &PreparedText,
    folded_term: &[char],
    start: usize,
    max_window: usize,
    cipher: &dyn Cipher,
) -> ChainWalk {
    let folded = prepared.folded();
    let len = folded.len();

    let mut cursor = start;
    let mut steps = Vec::with_capacity(folded_term.len());

    for (index, &target) in folded_term.iter().enumerate() {
        let window_end = cursor.saturating_add(max_window).min(len.saturating_sub(1));
        let found = if cursor < len {
            (cursor..=window_end).find(|&pos| folded[pos] == target)
        } else {
            None
        };

        match found {
            Some(pos) => {
                let intervening_letters = prepared.slice(cursor, pos);
                let intervening_value = cipher.calculate(&intervening_letters);
                steps.push(ChainStep {
                    letter: prepared.stripped()[pos],
                    position: pos,
                    interval: pos - cursor,
                    intervening_letters,
                    intervening_value,
                });
                cursor = pos + 1;
            }
            None => {
                return ChainWalk::Broken {
                    failed_index: index,
                    failed_letter: target,
                    steps,
                };
            }
        }
    }

    ChainWalk::Complete(steps)
}

fn build_result(term: &str, steps: Vec<ChainStep>, cipher: &dyn Cipher) -> ChainResult {
    let first = steps[0].position;
    let last = steps[steps.len() - 1].position;
    let total_interval_sum = steps.iter().map(|step| step.interval).sum();
    let intervening_total: i64 = steps.iter().map(|step| step.intervening_value).sum();

    ChainResult {
        term: term.to_string(),
        steps,
        total_length: last - first,
        total_interval_sum,
        total_value: cipher.calculate(term) + intervening_total,
    }
}
