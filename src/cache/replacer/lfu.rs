//! LFU (Least Frequently Used) replacement policy.
//!
//! Each entry counts its own hits, starting at 1 on admission. A hit touches
//! only the requested entry, so one O(log n) `fix` restores heap order.

use crate::cache::CacheEntry;
use crate::common::Policy;
use crate::heap::{HeapOrder, IndexedHeap};

use super::Replacer;

/// Evicts the entry with the lowest hit count.
///
/// Among entries sharing the lowest count, the longest-resident one goes
/// first, independent of heap layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LfuReplacer;

impl HeapOrder<CacheEntry> for LfuReplacer {
    fn precedes(a: &CacheEntry, b: &CacheEntry) -> bool {
        a.priority() < b.priority() || (a.priority() == b.priority() && a.resident_longer_than(b))
    }
}

impl Replacer for LfuReplacer {
    const POLICY: Policy = Policy::Lfu;
    const ADMIT_PRIORITY: u64 = 1;

    fn on_hit(heap: &mut IndexedHeap<CacheEntry, Self>, position: usize) {
        heap.update(position, CacheEntry::increment);
    }
}
