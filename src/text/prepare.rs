//! Raw-text preparation.
//!
//! Search never runs against raw input. The preparer strips every character
//! outside the configured letter class into a letter-only stream, keeping a
//! map back to original character offsets so consumers can highlight hits in
//! the source document. Matching is case-insensitive: the stream carries an
//! internal lowercase fold alongside the original-case letters.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Which characters count as letters when stripping raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LetterClass {
    /// Any Unicode alphabetic character.
    #[default]
    Alphabetic,
    /// ASCII letters only.
    Latin,
    /// The Hebrew letter block, final forms included. Vowel points and
    /// cantillation marks are not letters and are stripped.
    Hebrew,
}

impl LetterClass {
    /// Returns true if `ch` belongs to this letter class.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            LetterClass::Alphabetic => ch.is_alphabetic(),
            LetterClass::Latin => ch.is_ascii_alphabetic(),
            LetterClass::Hebrew => ('\u{05D0}'..='\u{05EA}').contains(&ch),
        }
    }
}

/// A letter-only stream derived from raw input, with a map back to original
/// character offsets.
///
/// Immutable once built; searches share one instance, so building it once
/// per distinct document and reusing it is the expected pattern (see
/// [`PreparedTextCache`](crate::text::cache::PreparedTextCache)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    /// Letters that survived stripping, original case.
    stripped: Vec<char>,
    /// `position_map[i]` is the original-text char offset of `stripped[i]`.
    position_map: Vec<usize>,
    /// Lowercase fold of `stripped`, aligned index-for-index.
    folded: Vec<char>,
    /// The class the stream was prepared with.
    letter_class: LetterClass,
}

impl PreparedText {
    /// Number of letters in the stream.
    pub fn len(&self) -> usize {
        self.stripped.len()
    }

    /// Returns true if the stream holds no letters.
    ///
    /// Preparation rejects empty results, so this is false for any instance
    /// built through [`prepare_text`].
    pub fn is_empty(&self) -> bool {
        self.stripped.is_empty()
    }

    /// The stripped letters, original case.
    pub fn stripped(&self) -> &[char] {
        &self.stripped
    }

    /// Original-text char offsets, one per stripped letter.
    pub fn position_map(&self) -> &[usize] {
        &self.position_map
    }

    /// The class this stream was prepared with.
    pub fn letter_class(&self) -> LetterClass {
        self.letter_class
    }

    /// Letter at stream position `i`, original case.
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.stripped.get(i).copied()
    }

    /// Original-text char offset of stream position `i`.
    pub fn original_offset(&self, i: usize) -> Option<usize> {
        self.position_map.get(i).copied()
    }

    /// Original-case letters in the stream range `[start, end)`, clamped to
    /// the stream bounds.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.stripped.len());
        let start = start.min(end);
        self.stripped[start..end].iter().collect()
    }

    /// The lowercase fold used for matching.
    pub(crate) fn folded(&self) -> &[char] {
        &self.folded
    }
}

/// Strips `raw` to a letter-only stream under `letter_class`.
///
/// Deterministic and side-effect free. Fails when no letter survives.
pub fn prepare_text(raw: &str, letter_class: LetterClass) -> Result<PreparedText, SearchError> {
    let mut stripped = Vec::new();
    let mut position_map = Vec::new();
    let mut folded = Vec::new();

    for (offset, ch) in raw.chars().enumerate() {
        if letter_class.contains(ch) {
            stripped.push(ch);
            folded.push(fold_char(ch));
            position_map.push(offset);
        }
    }

    if stripped.is_empty() {
        return Err(SearchError::EmptyText);
    }

    Ok(PreparedText {
        stripped,
        position_map,
        folded,
        letter_class,
    })
}

/// Normalizes a search term the same way the stream is prepared: filters to
/// the letter class, then lowercase-folds.
///
/// A term that keeps fewer than two letters cannot form a sequence and is
/// rejected.
pub fn normalize_term(term: &str, letter_class: LetterClass) -> Result<Vec<char>, SearchError> {
    let folded: Vec<char> = term
        .chars()
        .filter(|ch| letter_class.contains(*ch))
        .map(fold_char)
        .collect();

    if folded.len() < 2 {
        return Err(SearchError::TermTooShort {
            term: term.to_string(),
        });
    }

    Ok(folded)
}

/// Single-char lowercase fold. The rare characters whose lowercase expands
/// to multiple chars keep their original form, so the fold stays aligned
/// index-for-index with the stream.
fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}
