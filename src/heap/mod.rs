//! Indexed priority queue.
//!
//! # Components
//! - [`IndexedHeap`] - Binary heap supporting in-place re-heapify by position
//! - [`Positioned`] - Entries that record their own heap slot
//! - [`HeapOrder`] - Caller-supplied ordering relation

mod indexed_heap;

pub use indexed_heap::{HeapOrder, IndexedHeap, Positioned};
