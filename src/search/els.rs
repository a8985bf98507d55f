//! Equidistant letter-sequence search.
//!
//! The scanner walks every candidate (skip, start) pair whose full span
//! stays inside the stream and compares the folded stream letters against
//! the folded term, bailing on the first mismatch. A backward search is the
//! same walk with a negative skip; hit positions are canonicalized to
//! ascending order on the way out with the direction flagged separately,
//! so consumers always see positions they can slice with.
//!
//! Worst case is `O(text * skips * term)`, kept responsive in practice by
//! the early-mismatch bail and the per-skip cancellation check.

use serde::{Deserialize, Serialize};

use crate::cipher::Cipher;
use crate::error::SearchError;
use crate::search::control::ScanControl;
use crate::search::sequence::{self, SequenceKind, SkipSpec};
use crate::text::prepare::{normalize_term, PreparedText};

/// Scan direction. Backward runs the skip negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Left-to-right through the stream.
    Forward,
    /// Right-to-left through the stream.
    Backward,
}

/// The letters lying strictly between two consecutive hit positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElsInterveningSegment {
    /// The later hit letter of the pair, original case.
    pub letter: char,
    /// Stream position of that letter.
    pub position: usize,
    /// Distance from the previous hit position.
    pub interval_from_previous: usize,
    /// The letters strictly between the pair, original case. Exactly
    /// `interval_from_previous - 1` of them.
    pub intervening_letters: String,
    /// Cipher value of `intervening_letters`.
    pub intervening_value: i64,
}

/// A single occurrence of a term at some skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElsResult {
    /// The term as the caller supplied it.
    pub term: String,
    /// Signed interval between hit letters. Negative for backward hits,
    /// zero for derived progressions (each segment carries its own
    /// interval there).
    pub skip: i64,
    /// Stream position of the term's first letter. For a backward hit this
    /// is the highest position, so `stripped[start_pos + i * skip]` reads
    /// the term back in order for either direction.
    pub start_pos: usize,
    /// Which way the scan ran.
    pub direction: Direction,
    /// Hit positions, ascending.
    pub letter_positions: Vec<usize>,
    /// One segment per consecutive pair of hit positions.
    pub intervening_segments: Vec<ElsInterveningSegment>,
    /// Cipher value of the term.
    pub term_value: i64,
    /// Sum of the segments' intervening values.
    pub skip_value_sum: i64,
}

/// Everything found for one term in one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElsSearchSummary {
    /// The term as the caller supplied it.
    pub term: String,
    /// Hits, ordered by ascending skip then ascending start.
    pub results: Vec<ElsResult>,
    /// Letters in the searched stream.
    pub source_length: usize,
}

/// Scans every skip in `[skip_min, skip_max]` for `term`.
///
/// Skips are magnitudes (`0 < skip_min <= skip_max`); `direction` decides
/// the sign. Fails fast when the term cannot fit even at `skip_min`.
pub fn search_els(
    prepared: &PreparedText,
    term: &str,
    skip_min: i64,
    skip_max: i64,
    direction: Direction,
    cipher: &dyn Cipher,
) -> Result<ElsSearchSummary, SearchError> {
    search_els_with_control(
        prepared,
        term,
        skip_min,
        skip_max,
        direction,
        cipher,
        &mut ScanControl::none(),
    )
}

/// [`search_els`] with cancellation and progress hooks, checked once per
/// skip value. A cancelled scan returns the hits accumulated so far.
pub fn search_els_with_control(
    prepared: &PreparedText,
    term: &str,
    skip_min: i64,
    skip_max: i64,
    direction: Direction,
    cipher: &dyn Cipher,
    control: &mut ScanControl<'_>,
) -> Result<ElsSearchSummary, SearchError> {
    if skip_min == 0 || skip_max == 0 {
        return Err(SearchError::ZeroSkip);
    }
    if skip_min < 0 || skip_max < skip_min {
        return Err(SearchError::InvalidSkipRange {
            min: skip_min,
            max: skip_max,
        });
    }

    let folded_term = normalize_term(term, prepared.letter_class())?;
    let len = prepared.len();

    let span_at_min = (folded_term.len() - 1).saturating_mul(skip_min as usize);
    if span_at_min >= len {
        return Err(SearchError::TermTooLong {
            term_len: folded_term.len(),
            skip: skip_min,
            text_len: len,
        });
    }

    let total_skips = (skip_max - skip_min + 1) as usize;
    let mut results = Vec::new();

    for (done, magnitude) in (skip_min..=skip_max).enumerate() {
        if control.is_cancelled() {
            break;
        }

        let span = (folded_term.len() - 1).saturating_mul(magnitude as usize);
        if span >= len {
            // Larger skips cannot fit either
            break;
        }

        let skip = match direction {
            Direction::Forward => magnitude,
            Direction::Backward => -magnitude,
        };

        // Either way the whole sequence stays in bounds.
        let starts = match direction {
            Direction::Forward => 0..(len - span),
            Direction::Backward => span..len,
        };

        for start in starts {
            if let Some(result) =
                match_at(prepared, &folded_term, term, start, skip, direction, cipher)
            {
                results.push(result);
            }
        }

        control.report(done + 1, total_skips);
    }

    Ok(ElsSearchSummary {
        term: term.to_string(),
        results,
        source_length: len,
    })
}

/// Scans for `term` with letter offsets drawn from a derived progression
/// instead of a constant skip.
pub fn search_sequence(
    prepared: &PreparedText,
    term: &str,
    kind: SequenceKind,
    cipher: &dyn Cipher,
) -> Result<ElsSearchSummary, SearchError> {
    search_sequence_with_control(prepared, term, kind, cipher, &mut ScanControl::none())
}

/// [`search_sequence`] with cancellation and progress hooks, checked once
/// per start position.
pub fn search_sequence_with_control(
    prepared: &PreparedText,
    term: &str,
    kind: SequenceKind,
    cipher: &dyn Cipher,
    control: &mut ScanControl<'_>,
) -> Result<ElsSearchSummary, SearchError> {
    let folded_term = normalize_term(term, prepared.letter_class())?;
    let len = prepared.len();

    let offsets = sequence::offsets_for(kind, folded_term.len());
    let span = offsets.last().copied().unwrap_or(0);
    if span >= len {
        return Err(SearchError::TermTooLong {
            term_len: folded_term.len(),
            skip: 0,
            text_len: len,
        });
    }

    let folded = prepared.folded();
    let total = len - span;
    let mut results = Vec::new();

    for start in 0..total {
        if control.is_cancelled() {
            break;
        }

        let mut positions = Vec::with_capacity(folded_term.len());
        let mut matched = true;
        for (k, &expected) in folded_term.iter().enumerate() {
            let pos = start + offsets[k];
            if folded[pos] != expected {
                matched = false;
                break;
            }
            positions.push(pos);
        }

        if matched {
            let segments = segments_for(prepared, &positions, cipher);
            let skip_value_sum = segments.iter().map(|s| s.intervening_value).sum();
            results.push(ElsResult {
                term: term.to_string(),
                skip: 0,
                start_pos: start,
                direction: Direction::Forward,
                letter_positions: positions,
                intervening_segments: segments,
                term_value: cipher.calculate(term),
                skip_value_sum,
            });
        }

        control.report(start + 1, total);
    }

    Ok(ElsSearchSummary {
        term: term.to_string(),
        results,
        source_length: len,
    })
}

/// Runs the search a [`SkipSpec`] selects: a single-skip constant scan, or
/// a derived-progression scan. A negative constant skip scans backward.
pub fn search_with_spec(
    prepared: &PreparedText,
    term: &str,
    spec: &SkipSpec,
    cipher: &dyn Cipher,
) -> Result<ElsSearchSummary, SearchError> {
    spec.validate()?;

    match spec.mode.sequence_kind() {
        Some(kind) => search_sequence(prepared, term, kind, cipher),
        None => {
            let skip = spec.skip_value.ok_or(SearchError::MissingSkipValue)?;
            let direction = if skip < 0 {
                Direction::Backward
            } else {
                Direction::Forward
            };
            search_els(prepared, term, skip.abs(), skip.abs(), direction, cipher)
        }
    }
}

/// Builds the intervening segments for an ascending position list.
///
/// Validates the positions are strictly ascending and in bounds; each
/// segment holds the letters strictly between a consecutive pair (exactly
/// `p2 - p1 - 1` of them) with their aggregate cipher value.
pub fn extract_intervening_letters(
    prepared: &PreparedText,
    positions: &[usize],
    cipher: &dyn Cipher,
) -> Result<Vec<ElsInterveningSegment>, SearchError> {
    for (index, &pos) in positions.iter().enumerate() {
        if pos >= prepared.len() || (index > 0 && pos <= positions[index - 1]) {
            return Err(SearchError::InvalidPositions { index });
        }
    }

    Ok(segments_for(prepared, positions, cipher))
}

/// Segment construction shared by the searchers and the public extractor.
/// Callers guarantee ascending in-bounds positions.
fn segments_for(
    prepared: &PreparedText,
    positions: &[usize],
    cipher: &dyn Cipher,
) -> Vec<ElsInterveningSegment> {
    positions
        .windows(2)
        .map(|pair| {
            let (prev, pos) = (pair[0], pair[1]);
            let intervening_letters = prepared.slice(prev + 1, pos);
            let intervening_value = cipher.calculate(&intervening_letters);
            ElsInterveningSegment {
                letter: prepared.stripped()[pos],
                position: pos,
                interval_from_previous: pos - prev,
                intervening_letters,
                intervening_value,
            }
        })
        .collect()
}

/// Tries the term at one (start, skip) candidate. Bounds are the caller's
/// responsibility; this only compares letters and assembles the record.
fn match_at(
    prepared: &PreparedText,
    folded_term: &[char],
    term: &str,
    start: usize,
    skip: i64,
    direction: Direction,
    cipher: &dyn Cipher,
) -> Option<ElsResult> {
    let folded = prepared.folded();

    let mut positions = Vec::with_capacity(folded_term.len());
    for (k, &expected) in folded_term.iter().enumerate() {
        let pos = (start as i64 + k as i64 * skip) as usize;
        if folded[pos] != expected {
            return None;
        }
        positions.push(pos);
    }

    if skip < 0 {
        positions.reverse();
    }

    let segments = segments_for(prepared, &positions, cipher);
    let skip_value_sum = segments.iter().map(|s| s.intervening_value).sum();

    Some(ElsResult {
        term: term.to_string(),
        skip,
        start_pos: start,
        direction,
        letter_positions: positions,
        intervening_segments: segments,
        term_value: cipher.calculate(term),
        skip_value_sum,
    })
}
