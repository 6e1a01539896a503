//! LRU (Least Recently Used) replacement policy.
//!
//! Recency is tracked with a per-entry staleness counter instead of a
//! global timestamp: every served request ages the entries it did not touch
//! by one, and a hit resets the requested entry to zero. Staleness values
//! stay pairwise distinct, so the stalest entry is exactly the least
//! recently used one.
//!
//! ```text
//!   request:      1     2     3     2     4   (capacity 3)
//!   staleness:  {1:0} {1:1  {1:2  {1:3  {2:1
//!                      2:0}  2:1   2:0   3:2
//!                            3:0}  3:1}  4:0}
//!
//!   request 4 misses: everything ages (1:4 2:1 3:2), the stalest
//!   entry (page 1) is evicted, and page 4 is admitted at 0.
//! ```

use crate::cache::CacheEntry;
use crate::common::Policy;
use crate::heap::{HeapOrder, IndexedHeap, Positioned};

use super::Replacer;

/// Evicts the entry with the highest staleness.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruReplacer;

impl HeapOrder<CacheEntry> for LruReplacer {
    fn precedes(a: &CacheEntry, b: &CacheEntry) -> bool {
        a.priority() > b.priority() || (a.priority() == b.priority() && a.resident_longer_than(b))
    }
}

impl Replacer for LruReplacer {
    const POLICY: Policy = Policy::Lru;
    const ADMIT_PRIORITY: u64 = 0;

    /// Age everything except the hit entry, then reset the hit entry.
    ///
    /// Uniform aging keeps the other entries' relative order, so only the
    /// hit entry needs a `fix`.
    fn on_hit(heap: &mut IndexedHeap<CacheEntry, Self>, position: usize) {
        heap.adjust_all(|entry| {
            if entry.heap_position() != position {
                entry.increment();
            }
        });
        heap.update(position, CacheEntry::reset);
    }

    /// No entry was served: age all of them.
    fn on_miss(heap: &mut IndexedHeap<CacheEntry, Self>) {
        heap.adjust_all(CacheEntry::increment);
    }
}
