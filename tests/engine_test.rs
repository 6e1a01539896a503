//! Eviction engine tests.
//!
//! These exercise the public request contract of both policies through
//! `PageCache`, the way a driving harness would.

use std::io;
use std::sync::{Arc, Mutex};

use pagesim::cache::TRACE_TARGET;
use pagesim::{CacheConfig, LfuEngine, LruEngine, PageCache, PageId, Policy};

fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

fn build(capacity: i64, policy: Policy) -> Box<dyn PageCache> {
    CacheConfig::new(capacity, policy).unwrap().build()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_negative_capacity_is_configuration_error() {
    for policy in Policy::ALL {
        let err = CacheConfig::new(-1, policy).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    let err = LruEngine::create(-1, false).unwrap_err();
    assert!(err.to_string().contains("-1"));
    assert!(LfuEngine::create(-1, false).is_err());
}

#[test]
fn test_unknown_policy_is_configuration_error() {
    let err = "mru".parse::<Policy>().unwrap_err();
    assert!(err.is_invalid_configuration());
}

// ============================================================================
// Properties shared by both policies
// ============================================================================

#[test]
fn test_zero_capacity_always_misses() {
    for policy in Policy::ALL {
        let mut cache = build(0, policy);
        let outcomes = cache.process_all(&pages(&[1, 1, 1, 2, 2]));

        assert!(outcomes.iter().all(|&hit| !hit), "{} hit with capacity 0", policy);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 5);
    }
}

#[test]
fn test_repeat_request_hits() {
    for policy in Policy::ALL {
        let mut cache = build(1, policy);

        assert!(!cache.process_request(PageId::new(9)));
        assert!(cache.process_request(PageId::new(9)));
        assert!(cache.contains(PageId::new(9)));
    }
}

#[test]
fn test_capacity_bound_holds() {
    let requests: Vec<PageId> = (0..200u32).map(|i| PageId::new((i * 7) % 23)).collect();

    for policy in Policy::ALL {
        for capacity in 0..6 {
            let mut cache = build(capacity, policy);
            for &page in &requests {
                cache.process_request(page);
                assert!(cache.len() <= capacity as usize);
            }
        }
    }
}

#[test]
fn test_resident_pages_are_unique() {
    for policy in Policy::ALL {
        let mut cache = build(4, policy);
        cache.process_all(&pages(&[1, 2, 1, 3, 1, 4, 2, 5, 1]));

        let mut resident: Vec<PageId> = cache.resident().into_iter().map(|(p, _)| p).collect();
        let before = resident.len();
        resident.sort();
        resident.dedup();
        assert_eq!(resident.len(), before);
    }
}

#[test]
fn test_clear_through_trait() {
    let mut cache = build(3, Policy::Lfu);
    cache.process_all(&pages(&[1, 2, 3]));

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats().misses, 3);
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_thrashing_capacity_one() {
    let mut cache = build(1, Policy::Lru);
    assert_eq!(cache.process_all(&pages(&[5, 6, 5])), vec![false, false, false]);
}

#[test]
fn test_lru_hit_page_is_freshest() {
    let mut cache = LruEngine::with_capacity(4);
    cache.process_all(&pages(&[1, 2, 3, 4, 2, 3]));

    cache.process_request(PageId::new(1));

    let hit = cache.priority_of(PageId::new(1)).unwrap();
    for (page, staleness) in cache.resident() {
        if page != PageId::new(1) {
            assert!(hit < staleness);
        }
    }
    assert_ne!(cache.next_victim(), Some(PageId::new(1)));
}

#[test]
fn test_lru_classic_sequence() {
    // Belady's sequence, capacity 3: LRU faults 10 times
    let requests = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    let mut cache = build(3, Policy::Lru);

    let outcomes = cache.process_all(&requests);

    assert_eq!(
        outcomes,
        vec![false, false, false, false, false, false, false, true, true, false, false, false]
    );
    assert_eq!(cache.stats().misses, 10);
}

// ============================================================================
// LFU
// ============================================================================

#[test]
fn test_lfu_frequency_preference() {
    let mut cache = build(2, Policy::Lfu);

    let outcomes = cache.process_all(&pages(&[1, 2, 1, 3, 1, 2]));

    assert_eq!(outcomes, vec![false, false, true, false, true, false]);
    let mut resident = cache.resident();
    resident.sort();
    assert_eq!(resident, vec![(PageId::new(1), 3), (PageId::new(2), 1)]);
}

#[test]
fn test_lfu_keeps_hot_page_through_scan() {
    let mut cache = LfuEngine::with_capacity(2);
    cache.process_all(&pages(&[7, 7, 7]));

    // A scan of one-off pages never displaces the hot page
    for page in 100..120 {
        assert!(!cache.process_request(PageId::new(page)));
    }

    assert!(cache.process_request(PageId::new(7)));
    assert_eq!(cache.priority_of(PageId::new(7)), Some(4));
}

// ============================================================================
// Tracing
// ============================================================================

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn traced<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buf.contents())
}

#[test]
fn test_trace_reports_hits_faults_and_evictions() {
    let (outcomes, output) = traced(|| {
        let mut cache = CacheConfig::new(1, Policy::Lru)
            .unwrap()
            .with_trace(true)
            .build();
        cache.process_all(&pages(&[5, 5, 6]))
    });

    assert_eq!(outcomes, vec![false, true, false]);
    assert!(output.contains(TRACE_TARGET));
    assert!(output.contains("fault"));
    assert!(output.contains("hit"));
    assert!(output.contains("evicted=5"));
}

#[test]
fn test_trace_disabled_is_silent() {
    let (_, output) = traced(|| {
        let mut cache = LfuEngine::create(2, false).unwrap();
        cache.process_all(&pages(&[1, 2, 3]))
    });

    assert!(output.is_empty());
}

#[test]
fn test_trace_does_not_change_results() {
    let requests: Vec<PageId> = (0..100u32).map(|i| PageId::new((i * i) % 11)).collect();

    for policy in Policy::ALL {
        let config = CacheConfig::new(3, policy).unwrap();
        let quiet = config.build().process_all(&requests);
        let (loud, _) = traced(|| config.with_trace(true).build().process_all(&requests));
        assert_eq!(quiet, loud);
    }
}
