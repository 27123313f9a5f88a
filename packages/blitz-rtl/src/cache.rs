//! Memoizing layer over direction analysis
//!
//! Bounded LRU keyed by a 64-bit `ahash` digest of the text plus the
//! language hint, so entries never hold a copy of the text. Only successful
//! results are stored.

use std::hash::BuildHasher;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ahash::RandomState;
use lru::LruCache;
use parking_lot::Mutex;

use crate::analysis::{analyze, TextDirectionResult};
use crate::error::RtlResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AnalysisKey {
    digest: u64,
    hint: Option<String>,
}

/// Cache statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Get cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Thread-safe LRU cache of direction analysis results
pub struct AnalysisCache {
    entries: Mutex<LruCache<AnalysisKey, Arc<TextDirectionResult>, RandomState>>,
    digest: RandomState,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::with_hasher(capacity, RandomState::new())),
            digest: RandomState::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Analyze `text`, reusing a previous result when available
    pub fn analyze(&self, text: &str, hint: Option<&str>) -> RtlResult<Arc<TextDirectionResult>> {
        let key = self.key(text, hint);

        if let Some(cached) = self.entries.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(cached));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(analyze(text, hint)?);
        self.entries.lock().put(key, Arc::clone(&result));

        Ok(result)
    }

    fn key(&self, text: &str, hint: Option<&str>) -> AnalysisKey {
        AnalysisKey {
            digest: BuildHasher::hash_one(&self.digest, text),
            hint: hint.map(str::to_ascii_lowercase),
        }
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: entries.len(),
            capacity: entries.cap().get(),
        }
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(256)
    }
}

impl std::fmt::Debug for AnalysisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisCache")
            .field("stats", &self.stats())
            .finish()
    }
}
