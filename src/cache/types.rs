//! Error types for the cache layer.

use thiserror::Error;

use crate::loader::StoreError;
use crate::project::ProjectId;

/// Errors surfaced by cache construction and bulk operations.
///
/// Single-item lookups never return these: per the degradation policy a
/// store failure is logged and answered as absent instead.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store failed during construction or a bulk call.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bulk fetch produced no projects where at least one was required.
    #[error("no projects found for ids {ids:?}")]
    ProjectsNotFound { ids: Vec<ProjectId> },
}
