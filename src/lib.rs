//! pagesim - an online paging simulator with swappable eviction policies.
//!
//! Feeds a sequence of integer page requests through a fixed-capacity cache
//! and reports, per request, whether the page was already resident. Useful
//! for comparing eviction heuristics in the study of online algorithms.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Request contract (cache::PageCache)              │   │
//! │  │     process_request(PageId) -> hit?   [Runtime Swappable]│   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          EvictionEngine<R: Replacer> (cache/)           │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacers: LRU (staleness) | LFU (hit count)  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │             CacheEntry + CacheStats + tracing            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Indexed priority queue (heap/)                 │   │
//! │  │   push / pop_extreme / fix(position)  all O(log n)       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, configuration)
//! - [`cache`] - Eviction engines and policies
//! - [`heap`] - Indexed binary heap
//!
//! # Quick Start
//! ```
//! use pagesim::{CacheConfig, PageId, Policy};
//!
//! let mut cache = CacheConfig::new(2, Policy::Lru).unwrap().build();
//!
//! let requests: Vec<PageId> = [1, 2, 1, 3, 2].into_iter().map(PageId::new).collect();
//! let outcomes = cache.process_all(&requests);
//!
//! assert_eq!(outcomes, vec![false, false, true, false, false]);
//! println!("{}", cache.stats());
//! ```

pub mod cache;
pub mod common;
pub mod heap;

// Re-export commonly used items at crate root for convenience
pub use cache::{CacheEntry, CacheStats, EvictionEngine, LfuEngine, LruEngine, PageCache};
pub use common::{CacheConfig, Error, PageId, Policy, Result};
