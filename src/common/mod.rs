//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (capacity, policy selection)
//! - Error types
//! - Identifiers (PageId)

pub mod config;
pub mod error;
mod page_id;

pub use config::{CacheConfig, Policy};
pub use error::{Error, Result};
pub use page_id::PageId;
