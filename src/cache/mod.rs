//! Page cache simulation.
//!
//! A cache holds at most `capacity` pages and classifies every request as a
//! hit or a fault. When a fault arrives at a full cache, the eviction policy
//! picks which resident page to drop.
//!
//! # Components
//! - [`EvictionEngine`] - The generic engine ([`LruEngine`], [`LfuEngine`])
//! - [`PageCache`] - Request contract shared by all engines
//! - [`CacheEntry`] - A resident page plus its priority metadata
//! - [`CacheStats`] - Hit/fault/eviction counters
//! - [`replacer`] - Eviction policy implementations

mod engine;
mod entry;
mod page_cache;
pub mod replacer;
mod stats;

pub use engine::{EvictionEngine, LfuEngine, LruEngine, TRACE_TARGET};
pub use entry::CacheEntry;
pub use page_cache::PageCache;
pub use stats::CacheStats;
