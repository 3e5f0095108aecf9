//! Loader contract for reaching the persistent project store.
//!
//! The cache never talks to the store directly; it goes through
//! [`ProjectLoader`], implemented by the storage layer. Every call is
//! synchronous and blocks the calling thread for the duration of the store
//! round-trip.

use std::collections::HashMap;

use thiserror::Error;

use crate::project::{Project, ProjectId};

/// Error raised when the persistent store cannot complete a call.
///
/// Not-found is not an error: single-item fetches report it as `Ok(None)`
/// and batch fetches simply omit the missing ids.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("project store unreachable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query.
    #[error("project store query failed: {0}")]
    Query(String),
}

/// Synchronous access to the persistent project store.
///
/// Cache strategies consume this to resolve misses and to preload at
/// construction time. Implementations must be callable from any thread.
pub trait ProjectLoader: Send + Sync {
    /// Fetch a single project by id, active or not.
    fn fetch_project_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;

    /// Fetch a single active project by exact name.
    fn fetch_project_by_name(&self, name: &str) -> Result<Option<Project>, StoreError>;

    /// Fetch a batch of projects by id. Unknown ids are omitted from the
    /// result; the result may be empty.
    fn fetch_projects_by_ids(&self, ids: &[ProjectId]) -> Result<Vec<Project>, StoreError>;

    /// Fetch every active project.
    fn fetch_active_projects(&self) -> Result<Vec<Project>, StoreError>;

    /// Fetch the name to id mapping for every active project.
    fn fetch_all_project_names(&self) -> Result<HashMap<String, ProjectId>, StoreError>;

    /// Fetch up to `count` most recently used projects, possibly empty.
    fn fetch_recent_projects(&self, count: usize) -> Result<Vec<Project>, StoreError>;

    /// Attach flow definitions to each project in place.
    ///
    /// Cache strategies call this before wrapping projects for installation,
    /// so a project is never visible through an index without its flows.
    fn load_flows(&self, projects: &mut [Project]) -> Result<(), StoreError>;
}
