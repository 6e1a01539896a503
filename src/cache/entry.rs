//! CacheEntry - one resident page.
//!
//! A [`CacheEntry`] holds a page identifier plus the metadata the eviction
//! policies order by:
//! - The priority key (staleness for LRU, hit count for LFU)
//! - Its current slot in the engine's heap
//! - When it was admitted, for breaking ties between equal keys

use std::fmt;

use crate::common::PageId;
use crate::heap::Positioned;

/// A resident page in an eviction engine.
///
/// Entries are created on a miss, mutated on hits (or aged by other
/// requests), and destroyed when evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Which page this entry holds.
    page_id: PageId,

    /// Policy-defined key: staleness (LRU) or hit count (LFU).
    priority: u64,

    /// Slot in the heap's backing array, maintained by the heap.
    position: usize,

    /// Admission sequence number; lower means resident longer.
    admitted: u64,
}

impl CacheEntry {
    /// Create an entry that is not yet in any heap.
    pub fn new(page_id: PageId, priority: u64, admitted: u64) -> Self {
        Self {
            page_id,
            priority,
            position: usize::MAX,
            admitted,
        }
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    /// Current priority key.
    #[inline]
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// Admission sequence number.
    #[inline]
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Add one to the priority key, saturating at `u64::MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.priority = self.priority.saturating_add(1);
    }

    /// Set the priority key back to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.priority = 0;
    }

    /// Tie-break: true if `self` has been resident longer than `other`.
    #[inline]
    pub fn resident_longer_than(&self, other: &CacheEntry) -> bool {
        self.admitted < other.admitted
    }
}

impl Positioned for CacheEntry {
    #[inline]
    fn heap_position(&self) -> usize {
        self.position
    }

    #[inline]
    fn set_heap_position(&mut self, position: usize) {
        self.position = position;
    }
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page_id.0, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = CacheEntry::new(PageId::new(7), 1, 3);
        assert_eq!(entry.page_id(), PageId::new(7));
        assert_eq!(entry.priority(), 1);
        assert_eq!(entry.admitted(), 3);
    }

    #[test]
    fn test_entry_increment_and_reset() {
        let mut entry = CacheEntry::new(PageId::new(1), 0, 0);

        entry.increment();
        entry.increment();
        assert_eq!(entry.priority(), 2);

        entry.reset();
        assert_eq!(entry.priority(), 0);
    }

    #[test]
    fn test_entry_increment_saturates() {
        let mut entry = CacheEntry::new(PageId::new(1), u64::MAX, 0);
        entry.increment();
        assert_eq!(entry.priority(), u64::MAX);
    }

    #[test]
    fn test_entry_residency_tie_break() {
        let older = CacheEntry::new(PageId::new(9), 1, 0);
        let newer = CacheEntry::new(PageId::new(2), 1, 1);

        assert!(older.resident_longer_than(&newer));
        assert!(!newer.resident_longer_than(&older));
        assert!(!older.resident_longer_than(&older));
    }

    #[test]
    fn test_entry_display() {
        let entry = CacheEntry::new(PageId::new(5), 3, 0);
        assert_eq!(format!("{}", entry), "5:3");
    }
}
