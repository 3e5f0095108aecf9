//! flowcache - project metadata caching for the orchestration web server.
//!
//! This library sits between request-handling code and the persistent
//! project store. It answers project lookups (by id, by case-insensitive
//! name, by bulk id list, by name pattern) from memory and falls back to the
//! store only on a miss, keeping the store as the source of truth.
//!
//! # High-Level API
//!
//! Build one cache per process at startup and share it with request
//! handlers:
//!
//! ```ignore
//! use flowcache::cache::{build_cache, CacheConfig, CacheStrategy};
//! use flowcache::metrics::CacheMetrics;
//!
//! let config = CacheConfig::new(CacheStrategy::BoundedLru);
//! let cache = build_cache(&config, loader, CacheMetrics::new())?;
//!
//! if let Some(project) = cache.get_by_name("marketing-etl") {
//!     // project has its flows attached
//! }
//! ```

pub mod cache;
pub mod loader;
pub mod metrics;
pub mod project;

/// Version of the flowcache library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
