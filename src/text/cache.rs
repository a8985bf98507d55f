//! Bounded cache of prepared texts.
//!
//! Preparing a document is linear but not free on texts of tens of
//! thousands of characters searched interactively, so distinct inputs are
//! cached behind a content-hash key with LRU eviction. Entries are shared
//! as `Arc<PreparedText>`; concurrent searches hold read-only clones and
//! never mutate shared state.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use sha2::{Digest, Sha256};

use crate::error::SearchError;
use crate::text::prepare::{prepare_text, LetterClass, PreparedText};

/// Prepared texts kept alive by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// SHA-256 over the raw text plus a letter-class tag. The same document
/// prepared under two classes yields two distinct streams, so the class is
/// part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey([u8; 32]);

impl CacheKey {
    fn new(raw: &str, letter_class: LetterClass) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hasher.update([letter_class as u8]);
        Self(hasher.finalize().into())
    }
}

/// Bounded LRU cache of [`PreparedText`] instances keyed by content hash.
pub struct PreparedTextCache {
    entries: LruCache<CacheKey, Arc<PreparedText>>,
}

impl PreparedTextCache {
    /// Creates a cache holding up to `capacity` prepared texts. A zero
    /// capacity falls back to [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap());
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Returns the cached stream for `raw`, preparing and inserting it on a
    /// miss. The least recently used entry is evicted when full.
    pub fn get_or_prepare(
        &mut self,
        raw: &str,
        letter_class: LetterClass,
    ) -> Result<Arc<PreparedText>, SearchError> {
        let key = CacheKey::new(raw, letter_class);

        if let Some(prepared) = self.entries.get(&key) {
            return Ok(Arc::clone(prepared));
        }

        let prepared = Arc::new(prepare_text(raw, letter_class)?);
        self.entries.put(key, Arc::clone(&prepared));
        Ok(prepared)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PreparedTextCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
