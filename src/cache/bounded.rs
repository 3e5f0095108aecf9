//! Bounded LRU cache strategy with single-flight miss resolution.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rand::Rng;
use regex::Regex;

use crate::loader::ProjectLoader;
use crate::metrics::CacheMetrics;
use crate::project::{Project, ProjectId};

use super::config::CacheConfig;
use super::index::CaseInsensitiveIndex;
use super::lru::LruStore;
use super::r#trait::ProjectCache;
use super::stats::{CacheStatistics, CacheStats};
use super::store::StoreClient;
use super::types::CacheError;

/// Probability, in percent, that an access logs a statistics snapshot.
const STATS_LOG_PERCENT: u32 = 20;

/// Shared result slot for one in-flight miss computation.
type FlightCell = Arc<OnceLock<Option<Arc<Project>>>>;

/// Bounded cache strategy: a full name to id mirror over a size-bounded,
/// LRU-evicting project store.
///
/// The name index covers every active project and is never evicted from;
/// the project store holds at most `max_entries` projects and is seeded at
/// construction with the most recently used subset. A miss on the project
/// store resolves through a single-flight load: concurrent callers for the
/// same id block behind one store round-trip and share its result.
pub struct BoundedLruCache {
    name_to_id: CaseInsensitiveIndex<ProjectId>,
    entries: LruStore,
    in_flight: DashMap<ProjectId, FlightCell>,
    stats: CacheStats,
    metrics: CacheMetrics,
    store: StoreClient,
}

impl BoundedLruCache {
    /// Build the cache: mirror the name to id mapping, then seed the
    /// bounded store with recently used projects and their flows.
    ///
    /// # Errors
    ///
    /// Fails when the name mapping cannot be loaded; a failed recent-project
    /// fetch only degrades to an empty seed.
    pub fn new(
        config: &CacheConfig,
        loader: Arc<dyn ProjectLoader>,
        metrics: CacheMetrics,
    ) -> Result<Self, CacheError> {
        let cache = Self {
            name_to_id: CaseInsensitiveIndex::new(),
            entries: LruStore::new(config.max_entries),
            in_flight: DashMap::new(),
            stats: CacheStats::new(),
            metrics,
            store: StoreClient::new(loader),
        };
        cache.preload(config.preload_count)?;
        Ok(cache)
    }

    fn preload(&self, preload_count: usize) -> Result<(), CacheError> {
        tracing::info!("Loading active project names.");
        let names = self.store.all_project_names()?;
        for (name, id) in names {
            self.name_to_id.put(&name, id);
        }

        tracing::info!(count = preload_count, "Loading recently used projects.");
        let mut recent = self.store.recent_projects(preload_count);
        self.store.load_flows(&mut recent)?;
        for project in recent {
            self.entries.insert(Arc::new(project));
        }
        tracing::debug!(
            names = self.name_to_id.len(),
            projects = self.entries.len(),
            capacity = self.entries.max_entries(),
            "project cache seeded"
        );
        Ok(())
    }

    /// Resolve a miss through the store, at most once per id at a time.
    ///
    /// The first caller for an id becomes the leader: it records the miss,
    /// fetches the project with its flows and installs it. Concurrent
    /// callers for the same id block on the leader's cell and share the
    /// result. A not-found result is never cached; once the flight ends the
    /// next call re-attempts the fetch.
    fn load_missing(&self, id: ProjectId) -> Option<Arc<Project>> {
        let cell: FlightCell = {
            let entry = self.in_flight.entry(id).or_default();
            entry.value().clone()
        };

        let mut leader = false;
        let result = cell
            .get_or_init(|| {
                leader = true;
                // A flight that completed between our miss and this point may
                // already have installed the entry.
                if let Some(project) = self.entries.get(id) {
                    self.stats.record_hit();
                    return Some(project);
                }
                self.stats.record_miss();
                self.metrics.mark_project_cache_miss();
                let project = Arc::new(self.store.hydrated_by_id(id)?);
                self.entries.insert(project.clone());
                Some(project)
            })
            .clone();

        if leader {
            self.in_flight.remove(&id);
        }
        result
    }

    /// Install a project into both indexes.
    fn install(&self, project: Arc<Project>) {
        self.name_to_id.put(project.name(), project.id());
        self.entries.insert(project);
    }

    /// Projects whose names match the pattern, warmed into the cache.
    ///
    /// Scans the full name index, resolves the matching ids in one batch
    /// call and re-installs each result; a just-searched project is likely
    /// to be accessed again. Store failures degrade to an empty result.
    pub fn projects_matching(&self, pattern: &Regex) -> Vec<Arc<Project>> {
        let mut ids = Vec::new();
        for name in self.name_to_id.keys() {
            if pattern.find(&name).is_some() {
                if let Some(id) = self.name_to_id.get(&name) {
                    ids.push(id);
                }
            }
        }
        if ids.is_empty() {
            return Vec::new();
        }

        let mut matches = match self.store.projects_by_ids(&ids) {
            Ok(projects) => projects,
            Err(err) => {
                tracing::info!(error = %err, "no matching projects found");
                return Vec::new();
            }
        };
        if let Err(err) = self.store.load_flows(&mut matches) {
            tracing::warn!(error = %err, "could not load flows for matched projects");
            return Vec::new();
        }

        let matches: Vec<Arc<Project>> = matches.into_iter().map(Arc::new).collect();
        for project in &matches {
            self.install(project.clone());
        }
        matches
    }

    /// Current hit/miss counters with the derived miss rate.
    pub fn statistics(&self) -> CacheStatistics {
        self.stats.snapshot()
    }

    /// Log the statistics snapshot for roughly one access in five.
    fn maybe_log_stats(&self) {
        if rand::thread_rng().gen_range(0..100u32) < STATS_LOG_PERCENT {
            let snapshot = self.stats.snapshot();
            tracing::info!(
                hits = snapshot.hit_count,
                misses = snapshot.miss_count,
                miss_rate = snapshot.miss_rate(),
                "project cache statistics"
            );
        }
    }
}

impl ProjectCache for BoundedLruCache {
    fn put(&self, project: Arc<Project>) {
        self.install(project);
    }

    fn get_by_name(&self, name: &str) -> Option<Arc<Project>> {
        match self.name_to_id.get(name) {
            Some(id) => self.get_by_id(id),
            None => {
                // Name unknown to the mirror: full miss, resolve by name.
                let project = Arc::new(self.store.hydrated_by_name(name)?);
                self.install(project.clone());
                Some(project)
            }
        }
    }

    fn get_by_id(&self, id: ProjectId) -> Option<Arc<Project>> {
        self.maybe_log_stats();
        if let Some(project) = self.entries.get(id) {
            self.stats.record_hit();
            return Some(project);
        }
        self.load_missing(id)
    }

    fn remove(&self, project: &Project) {
        self.name_to_id.remove(project.name());
        self.entries.remove(project.id());
    }

    fn all_project_names(&self) -> Vec<String> {
        self.name_to_id.keys()
    }

    fn project_id(&self, name: &str) -> Option<ProjectId> {
        self.name_to_id.get(name)
    }

    /// The bounded store holds only a subset, so the active set comes from
    /// the store, flows attached, without being installed.
    fn active_projects(&self) -> Vec<Arc<Project>> {
        let mut projects = match self.store.active_projects() {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "could not load active projects from store");
                return Vec::new();
            }
        };
        if let Err(err) = self.store.load_flows(&mut projects) {
            tracing::warn!(error = %err, "could not load flows for active projects");
            return Vec::new();
        }
        projects.into_iter().map(Arc::new).collect()
    }

    /// Batch resolve and install; unlike the full mirror this returns
    /// whatever the store returns, possibly nothing.
    fn fetch_for_ids(&self, ids: &[ProjectId]) -> Result<Vec<Arc<Project>>, CacheError> {
        let mut projects = self.store.projects_by_ids(ids)?;
        self.store.load_flows(&mut projects)?;

        let projects: Vec<Arc<Project>> = projects.into_iter().map(Arc::new).collect();
        for project in &projects {
            self.install(project.clone());
        }
        Ok(projects)
    }
}
