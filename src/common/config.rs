//! Cache configuration.
//!
//! A [`CacheConfig`] captures everything needed to build an engine:
//! capacity, eviction policy, and whether request tracing is on.
//! Validation happens here, once, so engines never see a nonsensical
//! capacity.

use std::fmt;
use std::str::FromStr;

use crate::cache::{LfuEngine, LruEngine, PageCache};
use crate::common::{Error, Result};

/// Eviction policy selector.
///
/// Both policies share the same request contract, so the choice can be
/// made at runtime (e.g. from a command-line flag) via [`CacheConfig::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Least Recently Used: evict the stalest page.
    Lru,
    /// Least Frequently Used: evict the page with the fewest hits.
    Lfu,
}

impl Policy {
    /// Every supported policy, in a stable order.
    pub const ALL: [Policy; 2] = [Policy::Lru, Policy::Lfu];

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Lru => "lru",
            Policy::Lfu => "lfu",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(Policy::Lru),
            "lfu" => Ok(Policy::Lfu),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown eviction policy '{}' (expected one of: lru, lfu)",
                other
            ))),
        }
    }
}

/// Validate a caller-supplied capacity.
///
/// Zero is accepted (a cache that retains nothing). Negative values are
/// rejected rather than clamped to zero.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `capacity < 0`
pub fn validate_capacity(capacity: i64) -> Result<usize> {
    if capacity < 0 {
        return Err(Error::InvalidConfiguration(format!(
            "capacity must be non-negative, got {}",
            capacity
        )));
    }
    usize::try_from(capacity).map_err(|_| {
        Error::InvalidConfiguration(format!(
            "capacity {} does not fit in this platform's address space",
            capacity
        ))
    })
}

/// Validated engine configuration.
///
/// # Example
/// ```
/// use pagesim::{CacheConfig, PageId, Policy};
///
/// let mut cache = CacheConfig::new(2, Policy::Lfu).unwrap().build();
/// assert!(!cache.process_request(PageId::new(1)));
/// assert!(cache.process_request(PageId::new(1)));
///
/// assert!(CacheConfig::new(-1, Policy::Lru).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of resident pages.
    pub capacity: usize,

    /// Which page gets evicted when the cache is full.
    pub policy: Policy,

    /// Emit per-request trace events through `tracing`.
    pub trace: bool,
}

impl CacheConfig {
    /// Create a configuration, validating the capacity.
    ///
    /// Tracing starts disabled.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is negative
    pub fn new(capacity: i64, policy: Policy) -> Result<Self> {
        Ok(Self {
            capacity: validate_capacity(capacity)?,
            policy,
            trace: false,
        })
    }

    /// Enable or disable request tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Build an engine for the configured policy.
    pub fn build(&self) -> Box<dyn PageCache> {
        match self.policy {
            Policy::Lru => Box::new(LruEngine::from_config(self)),
            Policy::Lfu => Box::new(LfuEngine::from_config(self)),
        }
    }
}
