//! Text preparation and caching.
//!
//! This module provides:
//! - Stripping raw input to a letter-only stream with original offsets
//! - Term normalization matching the stream's preparation
//! - A bounded content-hash cache of prepared streams

pub mod cache;
pub mod prepare;

pub use cache::{PreparedTextCache, DEFAULT_CACHE_CAPACITY};
pub use prepare::{normalize_term, prepare_text, LetterClass, PreparedText};
