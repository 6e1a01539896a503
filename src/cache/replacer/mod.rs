//! Eviction policy implementations (replacers).
//!
//! A replacer decides two things for the generic
//! [`EvictionEngine`](crate::cache::EvictionEngine):
//! - the heap ordering, i.e. which resident entry is evicted next
//! - how priority keys change when a request is served
//!
//! Currently implements:
//! - [`LruReplacer`] - Least Recently Used (recency, per-entry staleness)
//! - [`LfuReplacer`] - Least Frequently Used (frequency, per-entry hit count)
//!
//! Both break ties between equal keys by evicting the entry that has been
//! resident longest.

mod lfu;
mod lru;

pub use lfu::LfuReplacer;
pub use lru::LruReplacer;

use crate::cache::CacheEntry;
use crate::common::Policy;
use crate::heap::{HeapOrder, IndexedHeap};

/// Priority-key strategy plugged into an eviction engine.
///
/// The heap extreme under `HeapOrder` is always the next eviction victim.
/// Implementations must leave the heap valid when a hook returns.
pub trait Replacer: HeapOrder<CacheEntry> + Sized {
    /// Policy this replacer implements.
    const POLICY: Policy;

    /// Priority key given to a newly admitted entry.
    const ADMIT_PRIORITY: u64;

    /// The entry at `position` was requested and found.
    fn on_hit(heap: &mut IndexedHeap<CacheEntry, Self>, position: usize);

    /// A request missed. Called before any eviction or admission.
    fn on_miss(_heap: &mut IndexedHeap<CacheEntry, Self>) {}
}
