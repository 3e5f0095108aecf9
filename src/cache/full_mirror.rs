//! Unbounded full-mirror cache strategy.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;

use crate::loader::ProjectLoader;
use crate::project::{Project, ProjectId};

use super::index::CaseInsensitiveIndex;
use super::r#trait::ProjectCache;
use super::store::StoreClient;
use super::types::CacheError;

/// Cache strategy mirroring every active project in memory.
///
/// Construction loads the complete active set and its flows; after that the
/// two indexes are an unbounded mirror and nothing is ever evicted
/// automatically. Misses (inactive or unknown projects) fall through to the
/// store and are passed through without retention, so repeated lookups for
/// an inactive project cost repeated store round-trips.
pub struct FullMirrorCache {
    by_id: DashMap<ProjectId, Arc<Project>>,
    by_name: CaseInsensitiveIndex<Arc<Project>>,
    store: StoreClient,
}

impl FullMirrorCache {
    /// Build the mirror by loading all active projects and their flows.
    ///
    /// # Errors
    ///
    /// Fails when the store cannot deliver the active set or its flows;
    /// a cache that cannot preload is misconfigured and must not start.
    pub fn new(loader: Arc<dyn ProjectLoader>) -> Result<Self, CacheError> {
        let cache = Self {
            by_id: DashMap::new(),
            by_name: CaseInsensitiveIndex::new(),
            store: StoreClient::new(loader),
        };

        let start = Instant::now();
        cache.preload()?;
        tracing::info!(
            projects = cache.by_id.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "project cache initialized"
        );
        Ok(cache)
    }

    /// Load all active projects, attach their flows in one batch call, and
    /// install them into both indexes.
    fn preload(&self) -> Result<(), CacheError> {
        tracing::info!("Loading active projects.");
        let mut projects = self.store.active_projects()?;
        if projects.is_empty() {
            return Ok(());
        }

        tracing::info!("Loading flows from active projects.");
        self.store.load_flows(&mut projects)?;
        for project in projects {
            self.put(Arc::new(project));
        }
        Ok(())
    }
}

impl ProjectCache for FullMirrorCache {
    fn put(&self, project: Arc<Project>) {
        self.by_name.put(project.name(), project.clone());
        self.by_id.insert(project.id(), project);
    }

    fn get_by_name(&self, name: &str) -> Option<Arc<Project>> {
        if let Some(project) = self.by_name.get(name) {
            return Some(project);
        }
        tracing::info!(name, "no active project with this name in cache, fetching from store");
        self.store.hydrated_by_name(name).map(Arc::new)
    }

    fn get_by_id(&self, id: ProjectId) -> Option<Arc<Project>> {
        if let Some(project) = self.by_id.get(&id) {
            return Some(project.value().clone());
        }
        self.store.hydrated_by_id(id).map(Arc::new)
    }

    fn remove(&self, project: &Project) {
        self.by_name.remove(project.name());
        self.by_id.remove(&project.id());
    }

    fn all_project_names(&self) -> Vec<String> {
        self.by_name.keys()
    }

    fn project_id(&self, name: &str) -> Option<ProjectId> {
        self.by_name.get(name).map(|project| project.id())
    }

    fn active_projects(&self) -> Vec<Arc<Project>> {
        self.by_id.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Resolves each id through the mirror. The mirror already retains every
    /// active project, so nothing new is installed here.
    fn fetch_for_ids(&self, ids: &[ProjectId]) -> Result<Vec<Arc<Project>>, CacheError> {
        let mut result = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(project) = self.get_by_id(id) {
                result.push(project);
            }
        }
        if result.is_empty() {
            return Err(CacheError::ProjectsNotFound { ids: ids.to_vec() });
        }
        Ok(result)
    }
}
