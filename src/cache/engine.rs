//! Eviction Engine - the request-processing core.
//!
//! The [`EvictionEngine`] provides:
//! - Capacity-bounded page residency
//! - Hit/fault classification per request
//! - Pluggable eviction policies via [`Replacer`]
//! - Optional per-request tracing

use std::fmt;

use tracing::debug;

use crate::cache::replacer::{LfuReplacer, LruReplacer, Replacer};
use crate::cache::{CacheEntry, CacheStats, PageCache};
use crate::common::config::{validate_capacity, CacheConfig};
use crate::common::{PageId, Policy, Result};
use crate::heap::IndexedHeap;

/// `tracing` target for request trace events.
pub const TRACE_TARGET: &str = "pagesim::trace";

/// Upper bound on slots reserved up front; larger caches grow on demand.
const MAX_PREALLOC: usize = 4096;

/// Engine evicting by recency.
pub type LruEngine = EvictionEngine<LruReplacer>;

/// Engine evicting by frequency.
pub type LfuEngine = EvictionEngine<LfuReplacer>;

/// A fixed-capacity page cache parameterized by its eviction policy.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                   EvictionEngine<R>                      │
/// │  ┌────────────────────────────────────────────────────┐  │
/// │  │      heap: IndexedHeap<CacheEntry, R>              │  │
/// │  │  [extreme] [..] [..] [..]   (len <= capacity)      │  │
/// │  └────────────────────────────────────────────────────┘  │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐    │
/// │  │  R::on_hit   │  │  R::on_miss  │  │    stats     │    │
/// │  │  R::precedes │  │ ADMIT_PRIO.. │  │  CacheStats  │    │
/// │  └──────────────┘  └──────────────┘  └──────────────┘    │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Request flow
/// 1. Scan the resident entries for the page.
/// 2. Hit: let the replacer update priority keys.
/// 3. Miss: let the replacer age entries, evict the heap extreme if full,
///    admit the page.
///
/// # Usage
/// ```
/// use pagesim::{LfuEngine, PageId};
///
/// let mut cache = LfuEngine::create(2, false).unwrap();
/// let outcomes: Vec<bool> = [1, 2, 1, 3, 1, 2]
///     .into_iter()
///     .map(|p| cache.process_request(PageId::new(p)))
///     .collect();
///
/// assert_eq!(outcomes, vec![false, false, true, false, true, false]);
/// ```
pub struct EvictionEngine<R: Replacer> {
    /// Resident entries in eviction order.
    heap: IndexedHeap<CacheEntry, R>,

    /// Maximum number of resident entries (immutable after construction).
    capacity: usize,

    /// Admission sequence handed to the next new entry.
    next_admission: u64,

    /// Emit trace events for each request.
    trace: bool,

    /// Request statistics.
    stats: CacheStats,
}

impl<R: Replacer> EvictionEngine<R> {
    /// Create an engine, validating the capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum resident pages; zero is a cache that retains
    ///   nothing
    /// * `trace_enabled` - Emit `tracing` events for every request
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is negative
    pub fn create(capacity: i64, trace_enabled: bool) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self::with_capacity(capacity).with_trace(trace_enabled))
    }

    /// Create an engine with an already-valid capacity and tracing off.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: IndexedHeap::with_capacity(capacity.min(MAX_PREALLOC)),
            capacity,
            next_admission: 0,
            trace: false,
            stats: CacheStats::new(),
        }
    }

    /// Create an engine from a validated configuration.
    ///
    /// The configuration's `policy` is not consulted; `R` decides. Use
    /// [`CacheConfig::build`] to pick the engine from the policy.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_capacity(config.capacity).with_trace(config.trace)
    }

    /// Enable or disable request tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    // ========================================================================
    // Public API: Requests
    // ========================================================================

    /// Serve one page request.
    ///
    /// Returns `true` if the page was resident (hit) and `false` if it was
    /// absent (fault). A fault admits the page, evicting the policy's victim
    /// first when the cache is full.
    pub fn process_request(&mut self, page_id: PageId) -> bool {
        if self.trace {
            debug!(
                target: TRACE_TARGET,
                policy = %R::POLICY,
                page = page_id.0,
                resident = %Residents(&self.heap),
                "request"
            );
        }

        let hit = if self.capacity == 0 {
            self.handle_zero_capacity(page_id);
            false
        } else {
            match self.heap.find_position(|entry| entry.page_id() == page_id) {
                Some(position) => {
                    self.handle_cache_hit(page_id, position);
                    true
                }
                None => {
                    self.handle_cache_miss(page_id);
                    false
                }
            }
        };

        assert!(
            self.heap.len() <= self.capacity,
            "resident count {} exceeds capacity {}",
            self.heap.len(),
            self.capacity
        );
        debug_assert!(self.heap.is_valid(), "heap invariants violated");

        if self.trace {
            debug!(
                target: TRACE_TARGET,
                policy = %R::POLICY,
                page = page_id.0,
                hit,
                resident = %Residents(&self.heap),
                "served"
            );
        }

        hit
    }

    /// Serve a sequence of requests in order, returning each outcome.
    pub fn process_all(&mut self, requests: &[PageId]) -> Vec<bool> {
        requests
            .iter()
            .map(|&page_id| self.process_request(page_id))
            .collect()
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Eviction policy of this engine.
    pub fn policy(&self) -> Policy {
        R::POLICY
    }

    /// Maximum number of resident pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True when a miss would force an eviction.
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Check whether a page is resident, without counting as a request.
    pub fn contains(&self, page_id: PageId) -> bool {
        self.priority_of(page_id).is_some()
    }

    /// Priority key of a resident page: staleness (LRU) or hit count (LFU).
    pub fn priority_of(&self, page_id: PageId) -> Option<u64> {
        self.heap
            .iter()
            .find(|entry| entry.page_id() == page_id)
            .map(CacheEntry::priority)
    }

    /// Resident pages with their priority keys, in heap order.
    ///
    /// The first element is the next eviction victim.
    pub fn resident(&self) -> Vec<(PageId, u64)> {
        self.heap
            .iter()
            .map(|entry| (entry.page_id(), entry.priority()))
            .collect()
    }

    /// The page that the next eviction would remove.
    pub fn next_victim(&self) -> Option<PageId> {
        self.heap.peek().map(CacheEntry::page_id)
    }

    /// Request statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Reset request statistics to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }

    /// Drop every resident page.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    // ========================================================================
    // Internal: Request handling
    // ========================================================================

    /// Capacity zero: nothing is resident, so every request faults and
    /// nothing is admitted.
    fn handle_zero_capacity(&mut self, page_id: PageId) {
        self.stats.record_miss();

        if self.trace {
            debug!(
                target: TRACE_TARGET,
                policy = %R::POLICY,
                page = page_id.0,
                "fault; zero capacity, page not retained"
            );
        }
    }

    fn handle_cache_hit(&mut self, page_id: PageId, position: usize) {
        R::on_hit(&mut self.heap, position);
        self.stats.record_hit();

        if self.trace {
            debug!(target: TRACE_TARGET, policy = %R::POLICY, page = page_id.0, "hit");
        }
    }

    fn handle_cache_miss(&mut self, page_id: PageId) {
        self.stats.record_miss();

        if self.trace {
            debug!(target: TRACE_TARGET, policy = %R::POLICY, page = page_id.0, "fault");
        }

        R::on_miss(&mut self.heap);

        if self.heap.len() >= self.capacity {
            self.evict_page();
        }

        let entry = CacheEntry::new(page_id, R::ADMIT_PRIORITY, self.next_admission);
        self.next_admission += 1;
        self.heap.push(entry);
    }

    /// Remove the heap extreme.
    fn evict_page(&mut self) {
        if let Some(victim) = self.heap.pop_extreme() {
            self.stats.record_eviction();

            if self.trace {
                debug!(
                    target: TRACE_TARGET,
                    policy = %R::POLICY,
                    evicted = victim.page_id().0,
                    priority = victim.priority(),
                    "evicted"
                );
            }
        }
    }
}

impl<R: Replacer> fmt::Debug for EvictionEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvictionEngine")
            .field("policy", &R::POLICY)
            .field("capacity", &self.capacity)
            .field("resident", &self.resident())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<R: Replacer> PageCache for EvictionEngine<R> {
    fn process_request(&mut self, page_id: PageId) -> bool {
        EvictionEngine::process_request(self, page_id)
    }

    fn policy(&self) -> Policy {
        R::POLICY
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        EvictionEngine::contains(self, page_id)
    }

    fn resident(&self) -> Vec<(PageId, u64)> {
        EvictionEngine::resident(self)
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        EvictionEngine::reset_stats(self)
    }

    fn clear(&mut self) {
        EvictionEngine::clear(self)
    }
}

/// Trace formatting of the resident set: `[page:priority, ...]`.
struct Residents<'a, R>(&'a IndexedHeap<CacheEntry, R>);

impl<R: Replacer> fmt::Display for Residents<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}
