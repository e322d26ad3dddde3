//! Memoization of single-vertex SAP queries.

use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::sap::ancestry::Ancestry;

/// Cache key for an unordered vertex pair, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    /// Normalize `(v, w)` so that `(w, v)` produces the same key.
    pub fn new(v: usize, w: usize) -> Self {
        PairKey {
            low: v.min(w),
            high: v.max(w),
        }
    }

    /// The smaller vertex id.
    pub fn low(&self) -> usize {
        self.low
    }

    /// The larger vertex id.
    pub fn high(&self) -> usize {
        self.high
    }
}

/// Unbounded pair cache with hit/miss accounting.
///
/// Entries are never evicted; the number of distinct keys is bounded by
/// `V * (V - 1) / 2`.
#[derive(Debug, Default)]
pub struct SapCache {
    entries: Mutex<AHashMap<PairKey, Ancestry>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl SapCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a pair, recording a hit or a miss.
    pub fn get(&self, key: PairKey) -> Option<Ancestry> {
        let entries = self.entries.lock();
        match entries.get(&key) {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(*result)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store the result for a pair.
    pub fn insert(&self, key: PairKey, result: Ancestry) {
        self.entries.lock().insert(key, result);
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

/// Cache performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,

    /// Number of cache misses.
    pub misses: usize,

    /// Number of cached pairs.
    pub entries: usize,
}

impl CacheStats {
    /// Calculate hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
