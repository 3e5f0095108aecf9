//! Cache strategy selection and sizing configuration.

use std::sync::Arc;

use crate::loader::ProjectLoader;
use crate::metrics::CacheMetrics;

use super::bounded::BoundedLruCache;
use super::full_mirror::FullMirrorCache;
use super::r#trait::ProjectCache;
use super::types::CacheError;

/// Default capacity of the bounded project store.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default number of recently used projects preloaded at construction.
pub const DEFAULT_PRELOAD_COUNT: usize = 100;

/// Which cache strategy to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Unbounded mirror of every active project.
    FullMirror,
    /// Size-bounded LRU cache behind a full name to id mirror.
    BoundedLru,
}

impl CacheStrategy {
    /// Parse a configuration value; unknown values fall back to the mirror.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bounded" | "bounded_lru" | "lru" => Self::BoundedLru,
            "full" | "full_mirror" | "inmemory" => Self::FullMirror,
            other => {
                if !other.is_empty() {
                    tracing::warn!(value = other, "unknown cache strategy, using full mirror");
                }
                Self::FullMirror
            }
        }
    }
}

/// Configuration for building a project cache.
///
/// # Example
///
/// ```
/// use flowcache::cache::{CacheConfig, CacheStrategy};
///
/// let config = CacheConfig::new(CacheStrategy::BoundedLru)
///     .with_max_entries(500)
///     .with_preload_count(50);
/// assert_eq!(config.max_entries, 500);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Strategy to instantiate.
    pub strategy: CacheStrategy,
    /// Capacity of the bounded project store.
    pub max_entries: usize,
    /// Number of recently used projects preloaded at construction.
    pub preload_count: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(CacheStrategy::FullMirror)
    }
}

impl CacheConfig {
    pub fn new(strategy: CacheStrategy) -> Self {
        Self {
            strategy,
            max_entries: DEFAULT_MAX_ENTRIES,
            preload_count: DEFAULT_PRELOAD_COUNT,
        }
    }

    /// Set the bounded store capacity.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the preload count for the bounded strategy.
    pub fn with_preload_count(mut self, preload_count: usize) -> Self {
        self.preload_count = preload_count;
        self
    }
}

/// Build the configured cache strategy over the given loader.
///
/// The result is the long-lived, process-wide cache instance; callers keep
/// it behind an `Arc` and hand clones to request handlers.
///
/// # Errors
///
/// Propagates the strategy's construction-time preload failure.
pub fn build_cache(
    config: &CacheConfig,
    loader: Arc<dyn ProjectLoader>,
    metrics: CacheMetrics,
) -> Result<Arc<dyn ProjectCache>, CacheError> {
    match config.strategy {
        CacheStrategy::FullMirror => Ok(Arc::new(FullMirrorCache::new(loader)?)),
        CacheStrategy::BoundedLru => Ok(Arc::new(BoundedLruCache::new(config, loader, metrics)?)),
    }
}
