//! Metrics emitted by the cache layer.
//!
//! The cache owns exactly one counter: bounded-strategy misses. The handle
//! is fire-and-forget and cheap to clone; the web server's metrics reporter
//! reads the counter on its own schedule.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handle for recording cache metrics.
///
/// Cheaply cloneable; all clones share the same counters, so one handle can
/// be given to the cache and another kept by the reporting side.
#[derive(Clone, Debug, Default)]
pub struct CacheMetrics {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    project_cache_miss: AtomicU64,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one bounded-strategy cache miss.
    #[inline]
    pub fn mark_project_cache_miss(&self) {
        self.inner.project_cache_miss.fetch_add(1, Ordering::Relaxed);
    }

    /// Total misses recorded since construction.
    pub fn project_cache_miss_count(&self) -> u64 {
        self.inner.project_cache_miss.load(Ordering::Relaxed)
    }
}
