//! The request contract shared by every eviction engine.

use crate::cache::CacheStats;
use crate::common::{PageId, Policy};

/// A fixed-capacity page cache driven one request at a time.
///
/// Engines for different policies are interchangeable behind this trait,
/// e.g. as `Box<dyn PageCache>` from [`CacheConfig::build`](crate::CacheConfig::build).
pub trait PageCache {
    /// Serve one request. Returns `true` on a hit, `false` on a fault.
    fn process_request(&mut self, page_id: PageId) -> bool;

    /// Serve a sequence of requests in order, returning each outcome.
    fn process_all(&mut self, requests: &[PageId]) -> Vec<bool> {
        requests
            .iter()
            .map(|&page_id| self.process_request(page_id))
            .collect()
    }

    /// Eviction policy of this cache.
    fn policy(&self) -> Policy;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a page is resident, without counting as a request.
    fn contains(&self, page_id: PageId) -> bool;

    /// Resident pages with their priority keys, in heap order.
    fn resident(&self) -> Vec<(PageId, u64)>;

    /// Request counters since creation or the last reset.
    fn stats(&self) -> CacheStats;

    fn reset_stats(&mut self);

    /// Drop every resident page. Capacity, policy and stats are kept.
    fn clear(&mut self);
}
