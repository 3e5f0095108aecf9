//! Hit and miss statistics for the bounded cache strategy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Monotonic hit/miss counters for a cache instance.
///
/// Counters only ever increase for the lifetime of the cache; they are
/// updated unconditionally on every access regardless of whether the
/// sampled diagnostic log fires.
#[derive(Debug)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    created_at: Instant,
}

impl Default for CacheStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStats {
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            created_at: Instant::now(),
        }
    }

    /// Record a cache hit.
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn miss_count(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Time since the cache was constructed.
    pub fn uptime(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Point-in-time view of the counters.
    pub fn snapshot(&self) -> CacheStatistics {
        CacheStatistics {
            hit_count: self.hit_count(),
            miss_count: self.miss_count(),
            uptime_secs: self.uptime().as_secs(),
        }
    }
}

/// Snapshot of cache statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatistics {
    pub hit_count: u64,
    pub miss_count: u64,
    pub uptime_secs: u64,
}

impl CacheStatistics {
    /// Fraction of accesses that missed (0.0 to 1.0).
    pub fn miss_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.miss_count as f64 / total as f64
        }
    }

    /// Fraction of accesses served from cache (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
