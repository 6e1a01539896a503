//! Request statistics tracking.

use std::fmt;

/// Counters kept by every eviction engine.
///
/// Engines are single-owner, so these are plain integers; a snapshot is
/// just a copy.
///
/// # Example
/// ```
/// use pagesim::{LruEngine, PageId};
///
/// let mut cache = LruEngine::with_capacity(1);
/// cache.process_request(PageId::new(1));
/// cache.process_request(PageId::new(1));
///
/// let stats = cache.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests for a page that was already resident.
    pub hits: u64,

    /// Requests for a page that was absent (page faults).
    pub misses: u64,

    /// Resident pages removed to make room for a new one.
    pub evictions: u64,
}

impl CacheStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requests processed.
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn miss_rate(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
