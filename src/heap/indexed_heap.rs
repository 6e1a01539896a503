//! Binary heap whose entries record their own array position.
//!
//! `std::collections::BinaryHeap` cannot re-order a single element after its
//! key changes; callers would have to pop and re-push, or scan in O(n) to find
//! it. Here every entry carries its current index, kept in sync by every swap,
//! so a changed entry can be re-heapified in place with [`IndexedHeap::fix`].
//!
//! ```text
//!   entries: Vec<T>            (arena; index == heap slot)
//!
//!   slot:      0        1        2        3
//!           ┌───────┬────────┬────────┬────────┐
//!           │ A @0  │  B @1  │  C @2  │  D @3  │   "@n" = recorded position
//!           └───────┴────────┴────────┴────────┘
//!
//!                  A            parent(i) = (i - 1) / 2
//!                /   \          left(i)   = 2i + 1
//!               B     C         right(i)  = 2i + 2
//!              /
//!             D
//! ```

use std::marker::PhantomData;

/// An entry that records its own slot in an [`IndexedHeap`].
///
/// The heap is the only writer of the position; callers read it to address
/// [`IndexedHeap::fix`] and [`IndexedHeap::update`].
pub trait Positioned {
    /// Current slot in the heap's backing array.
    fn heap_position(&self) -> usize;

    /// Record a new slot. Called by the heap on every move.
    fn set_heap_position(&mut self, position: usize);
}

/// Ordering relation for an [`IndexedHeap`].
///
/// `precedes(a, b)` returns true when `a` belongs closer to the top of the
/// heap than `b`. It must be a strict weak ordering: irreflexive and
/// transitive, with incomparability transitive as well.
pub trait HeapOrder<T> {
    fn precedes(a: &T, b: &T) -> bool;
}

/// Indexed priority queue.
///
/// The top ("extreme") is the entry that precedes every other under `O`.
/// All structural operations are O(log n); the queue has no capacity of its
/// own, bounding it is the owner's job.
pub struct IndexedHeap<T, O> {
    entries: Vec<T>,
    _order: PhantomData<fn() -> O>,
}

impl<T: Positioned, O: HeapOrder<T>> IndexedHeap<T, O> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty heap with room for `capacity` entries before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the entry at `i` precedes the entry at `j`.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    #[inline]
    pub fn compare(&self, i: usize, j: usize) -> bool {
        O::precedes(&self.entries[i], &self.entries[j])
    }

    /// The heap extreme, if any.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first()
    }

    /// The entry currently at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.entries.get(position)
    }

    /// Entries in backing-array order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Position of the first entry (in array order) matching `predicate`.
    ///
    /// This is a linear scan.
    pub fn find_position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries.iter().position(predicate)
    }

    /// Insert an entry and return the position it settled at.
    pub fn push(&mut self, mut entry: T) -> usize {
        let position = self.entries.len();
        entry.set_heap_position(position);
        self.entries.push(entry);
        self.sift_up(position)
    }

    /// Remove and return the heap extreme.
    ///
    /// Returns `None` only when the heap is empty.
    pub fn pop_extreme(&mut self) -> Option<T> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let extreme = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(extreme)
    }

    /// Restore heap order after the key of the entry at `position` changed.
    ///
    /// Returns the position the entry settled at.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds, or if the entry there does not
    /// record `position` as its own. Either means the caller addressed an
    /// entry by a stale position, which is a bug, not bad input.
    pub fn fix(&mut self, position: usize) -> usize {
        assert!(
            position < self.entries.len(),
            "heap position {} out of bounds (len {})",
            position,
            self.entries.len()
        );
        let recorded = self.entries[position].heap_position();
        assert_eq!(
            recorded, position,
            "heap position desynchronized: slot {} holds entry recorded at {}",
            position, recorded
        );

        if position > 0 && self.compare(position, Self::parent(position)) {
            self.sift_up(position)
        } else {
            self.sift_down(position)
        }
    }

    /// Mutate the entry at `position` and restore heap order.
    ///
    /// Returns the position the entry settled at.
    ///
    /// # Panics
    /// Same conditions as [`IndexedHeap::fix`].
    pub fn update<F>(&mut self, position: usize, f: F) -> usize
    where
        F: FnOnce(&mut T),
    {
        assert!(
            position < self.entries.len(),
            "heap position {} out of bounds (len {})",
            position,
            self.entries.len()
        );
        f(&mut self.entries[position]);
        self.fix(position)
    }

    /// Apply `f` to every entry in place, without re-heapifying.
    ///
    /// `f` must change keys in an order-preserving way (e.g. add the same
    /// amount to every key), or leave the few entries it disturbs to be
    /// repaired with [`IndexedHeap::fix`] afterwards. `f` must not touch the
    /// recorded position.
    pub fn adjust_all<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.entries.iter_mut().for_each(f);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check both heap invariants: every entry records its true position,
    /// and no child precedes its parent.
    ///
    /// O(n); intended for debug assertions and tests.
    pub fn is_valid(&self) -> bool {
        let positions_ok = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.heap_position() == i);

        let order_ok = (1..self.entries.len()).all(|i| !self.compare(i, Self::parent(i)));

        positions_ok && order_ok
    }

    // ========================================================================
    // Internal: sifting
    // ========================================================================

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    /// Swap two slots and re-record both positions.
    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.entries[i].set_heap_position(i);
        self.entries[j].set_heap_position(j);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = Self::parent(i);
            if !self.compare(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.compare(right, left) {
                right
            } else {
                left
            };
            if !self.compare(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
        i
    }
}

impl<T: Positioned, O: HeapOrder<T>> Default for IndexedHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}
