//! Cache contract shared by every strategy.

use std::sync::Arc;

use crate::project::{Project, ProjectId};

use super::types::CacheError;

/// Operation set every project-cache strategy implements.
///
/// Strategies differ in retention (unbounded mirror vs. bounded LRU) but
/// honor the same guarantees: lookups consult the store on a miss, store
/// failures degrade to absent for single-item lookups, and a project is
/// never visible without its flows attached. All operations are safe under
/// arbitrary concurrent invocation.
pub trait ProjectCache: Send + Sync {
    /// Insert or replace the entry for the project's id and name in both
    /// indexes. Re-putting the same project is a no-op beyond recency
    /// bookkeeping.
    fn put(&self, project: Arc<Project>);

    /// Case-insensitive name lookup, falling back to the store on a miss.
    ///
    /// Returns `None` if the name is unknown everywhere, including the
    /// store, or if the store could not be reached.
    fn get_by_name(&self, name: &str) -> Option<Arc<Project>>;

    /// Id lookup, falling back to the store on a miss.
    ///
    /// Returns `None` if the store has no such id or could not be reached.
    fn get_by_id(&self, id: ProjectId) -> Option<Arc<Project>>;

    /// Evict the project from both indexes. Absent entries are a no-op.
    fn remove(&self, project: &Project);

    /// Every name currently known to the name index, in normalized form.
    fn all_project_names(&self) -> Vec<String>;

    /// Name to id lookup without loading the project body.
    fn project_id(&self, name: &str) -> Option<ProjectId>;

    /// Every active project visible through the cache.
    fn active_projects(&self) -> Vec<Arc<Project>>;

    /// Bulk resolve by id; fetched projects are installed for future hits.
    ///
    /// The full-mirror strategy fails with [`CacheError::ProjectsNotFound`]
    /// when the result would be empty; the bounded strategy returns whatever
    /// the store returns.
    fn fetch_for_ids(&self, ids: &[ProjectId]) -> Result<Vec<Arc<Project>>, CacheError>;
}
