//! Integration tests for Elscan
//!
//! Exercises the public API end to end: prepare, search at constant and
//! derived skips, chain, factor, arrange. Every search here is
//! deterministic; two identical calls must return identical summaries.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use elscan::{
    build_matrix, fibonacci, get_grid_factors, prepare_text, search_chain, search_els,
    search_els_with_control, search_sequence, suggest_better_counts, Direction, LetterClass,
    NullCipher, OrdinalCipher, PreparedTextCache, ScanControl, SequenceKind,
};

/// The canonical constant-skip scenario: one hit, positions 0, 3, 6.
#[test]
fn test_constant_skip_scenario() {
    let prepared = prepare_text("ABCABCABC", LetterClass::Latin).unwrap();
    let summary = search_els(&prepared, "AAA", 3, 3, Direction::Forward, &NullCipher).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].start_pos, 0);
    assert_eq!(summary.results[0].letter_positions, vec![0, 3, 6]);
}

/// Prime counts fall back to a single row and nearby composites are offered.
#[test]
fn test_prime_grid_scenario() {
    let factors = get_grid_factors(17).unwrap();
    assert_eq!((factors.rows, factors.cols), (1, 17));
    assert!(!factors.ideal);

    let suggestions = suggest_better_counts(17, 2);
    assert!(suggestions.contains(&16)); // 4 x 4
    assert!(suggestions.contains(&18)); // 3 x 6
}

/// Cumulative Fibonacci offsets for six letters.
#[test]
fn test_fibonacci_scenario() {
    assert_eq!(fibonacci(6), vec![0, 1, 2, 4, 7, 12]);
}

/// The canonical chain scenario: CAT through XXXCXXAXXXT.
#[test]
fn test_chain_scenario() {
    let prepared = prepare_text("XXXCXXAXXXT", LetterClass::Latin).unwrap();
    let summary = search_chain(&prepared, "CAT", 10, None, &NullCipher).unwrap();

    assert_eq!(summary.results.len(), 1);
    let chain = &summary.results[0];
    let positions: Vec<usize> = chain.steps.iter().map(|step| step.position).collect();
    assert_eq!(positions, vec![3, 6, 10]);
    assert_eq!(chain.total_length, 7);
}

/// Every hit reads its term back out of the stream at the recorded skip.
#[test]
fn test_round_trip_property() {
    let raw = "The quick brown fox jumps over the lazy dog, then naps at noon.";
    let prepared = prepare_text(raw, LetterClass::Latin).unwrap();
    let stripped = prepared.stripped();

    for direction in [Direction::Forward, Direction::Backward] {
        let summary = search_els(&prepared, "ON", 1, 12, direction, &OrdinalCipher).unwrap();
        assert!(!summary.results.is_empty());

        for hit in &summary.results {
            let read: String = (0..hit.term.len() as i64)
                .map(|i| stripped[(hit.start_pos as i64 + i * hit.skip) as usize])
                .collect();
            assert!(read.eq_ignore_ascii_case(&hit.term));

            // Canonical ascending positions regardless of direction
            for pair in hit.letter_positions.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}

/// Identical calls return identical summaries, order included.
#[test]
fn test_determinism() {
    let prepared = prepare_text("banana bandana cabana", LetterClass::Latin).unwrap();
    let first = search_els(&prepared, "ana", 1, 8, Direction::Forward, &OrdinalCipher).unwrap();
    let second = search_els(&prepared, "ana", 1, 8, Direction::Forward, &OrdinalCipher).unwrap();
    assert_eq!(first, second);
}

/// Between adjacent hits the segment holds exactly the letters strictly
/// between them.
#[test]
fn test_segment_length_law() {
    let prepared = prepare_text("ABCABCABCABCABC", LetterClass::Latin).unwrap();
    let summary = search_els(&prepared, "AAA", 2, 6, Direction::Forward, &NullCipher).unwrap();

    for hit in &summary.results {
        for (segment, pair) in hit
            .intervening_segments
            .iter()
            .zip(hit.letter_positions.windows(2))
        {
            assert_eq!(
                segment.intervening_letters.chars().count(),
                pair[1] - pair[0] - 1
            );
        }
    }
}

/// A wider chain window never loses chains a narrower one found.
#[test]
fn test_monotone_window_effect() {
    let raw = "cats sat on a mat, a cat ate tuna and came back to chat";
    let prepared = prepare_text(raw, LetterClass::Latin).unwrap();

    let mut previous: Vec<usize> = Vec::new();
    for window in [2, 4, 8, 16] {
        let summary = search_chain(&prepared, "CAT", window, None, &NullCipher).unwrap();
        let firsts: Vec<usize> = summary
            .results
            .iter()
            .map(|chain| chain.steps[0].position)
            .collect();

        for first in &previous {
            assert!(firsts.contains(first), "window {window} lost a chain");
        }
        previous = firsts;
    }
}

/// Derived progressions place letters at generated offsets from the start.
#[test]
fn test_sequence_search_matches_generator() {
    let prepared = prepare_text("HExLxxO world", LetterClass::Latin).unwrap();
    // Triangular offsets 0, 1, 3, 6: H E L O
    let summary =
        search_sequence(&prepared, "HELO", SequenceKind::Triangular, &NullCipher).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].letter_positions, vec![0, 1, 3, 6]);
    assert_eq!(summary.results[0].skip, 0);
}

/// Result records keep their wire field names.
#[test]
fn test_result_serialization_fidelity() {
    let prepared = prepare_text("ABCABCABC", LetterClass::Latin).unwrap();
    let summary = search_els(&prepared, "AAA", 3, 3, Direction::Forward, &OrdinalCipher).unwrap();

    let value = serde_json::to_value(&summary.results[0]).unwrap();
    let object = value.as_object().unwrap();

    for field in [
        "term",
        "skip",
        "start_pos",
        "direction",
        "letter_positions",
        "intervening_segments",
        "term_value",
        "skip_value_sum",
    ] {
        assert!(object.contains_key(field), "missing field {field}");
    }
    assert_eq!(object["direction"], "Forward");
    assert_eq!(object["skip"], 3);

    let segment = &object["intervening_segments"][0];
    for field in [
        "letter",
        "position",
        "interval_from_previous",
        "intervening_letters",
        "intervening_value",
    ] {
        assert!(segment.get(field).is_some(), "missing segment field {field}");
    }
}

/// The prepared-text cache shares one instance per distinct document.
#[test]
fn test_cache_round_trip() {
    let mut cache = PreparedTextCache::new(4);
    let raw = "Genesis text goes here";

    let a = cache.get_or_prepare(raw, LetterClass::Latin).unwrap();
    let b = cache.get_or_prepare(raw, LetterClass::Latin).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let summary = search_els(&a, "ee", 1, 4, Direction::Forward, &NullCipher).unwrap();
    assert_eq!(summary.source_length, a.len());
}

/// A pre-cancelled scan returns cleanly with whatever it had.
#[test]
fn test_cancellation_is_clean() {
    let prepared = prepare_text("ABCABCABCABCABC", LetterClass::Latin).unwrap();
    let mut control = ScanControl {
        cancel: Some(Arc::new(AtomicBool::new(true))),
        progress: None,
    };

    let summary = search_els_with_control(
        &prepared,
        "AAA",
        1,
        6,
        Direction::Forward,
        &NullCipher,
        &mut control,
    )
    .unwrap();
    assert!(summary.results.is_empty());

    // The engine state is call-local; the same prepared text searches fine
    let full = search_els(&prepared, "AAA", 1, 6, Direction::Forward, &NullCipher).unwrap();
    assert!(!full.results.is_empty());
}

/// Grid dimensions from the factorizer always hold the arranged stream.
#[test]
fn test_factor_then_arrange() {
    let raw = "In the beginning was the word and the word was with";
    let prepared = prepare_text(raw, LetterClass::Latin).unwrap();

    let factors = get_grid_factors(prepared.len()).unwrap();
    let grid = build_matrix(&prepared, factors.rows, factors.cols).unwrap();

    assert!(grid.rows() * grid.cols() >= prepared.len());
    assert_eq!(grid.get(0, 0), prepared.char_at(0));
}

/// Hebrew text strips points and chains through consonants.
#[test]
fn test_hebrew_end_to_end() {
    let raw = "בְּרֵאשִׁית בָּרָא אֱלֹהִים";
    let prepared = prepare_text(raw, LetterClass::Hebrew).unwrap();

    // No points survive stripping
    for &ch in prepared.stripped() {
        assert!(('\u{05D0}'..='\u{05EA}').contains(&ch));
    }

    let summary = search_chain(&prepared, "בא", 10, None, &elscan::HebrewGematria).unwrap();
    assert!(!summary.results.is_empty());
}
