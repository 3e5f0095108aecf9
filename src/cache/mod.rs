//! Project cache: contract, strategies, and supporting structures.
//!
//! Two strategies implement the [`ProjectCache`] contract:
//!
//! - [`FullMirrorCache`] holds every active project in unbounded indexes and
//!   never evicts.
//! - [`BoundedLruCache`] keeps a full name to id mirror but bounds the
//!   project store, evicting by access recency and resolving misses through
//!   a single-flight loader.
//!
//! The strategy is selected at construction time from [`CacheConfig`] via
//! [`build_cache`]; one instance is built per process and shared with
//! request handlers.

mod bounded;
mod config;
mod full_mirror;
mod index;
mod lru;
mod stats;
mod store;
mod r#trait;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use bounded::BoundedLruCache;
pub use config::{build_cache, CacheConfig, CacheStrategy, DEFAULT_MAX_ENTRIES, DEFAULT_PRELOAD_COUNT};
pub use full_mirror::FullMirrorCache;
pub use index::CaseInsensitiveIndex;
pub use r#trait::ProjectCache;
pub use stats::{CacheStatistics, CacheStats};
pub use types::CacheError;
