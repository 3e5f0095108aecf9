//! Size-bounded project store with least-recently-used eviction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::project::{Project, ProjectId};

/// Entry in the bounded store.
struct StoreEntry {
    project: Arc<Project>,
    /// Logical clock value at the last touch.
    last_access: u64,
}

/// Bounded id-indexed project store evicting by access recency.
///
/// Recency is tracked with a logical clock rather than wall time so that
/// back-to-back accesses are always strictly ordered. Eviction happens on
/// insert, once the entry count exceeds the configured maximum.
pub(crate) struct LruStore {
    max_entries: usize,
    inner: Mutex<Inner>,
}

struct Inner {
    entries: HashMap<ProjectId, StoreEntry>,
    clock: u64,
}

impl LruStore {
    /// Create a store holding at most `max_entries` projects.
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                clock: 0,
            }),
        }
    }

    /// Get a project by id, marking it as most recently used.
    pub fn get(&self, id: ProjectId) -> Option<Arc<Project>> {
        let mut inner = self.inner.lock().unwrap();
        inner.clock += 1;
        let tick = inner.clock;

        let entry = inner.entries.get_mut(&id)?;
        entry.last_access = tick;
        Some(entry.project.clone())
    }

    /// Insert or replace a project, evicting the least recently used entry
    /// if the store would exceed its capacity.
    ///
    /// Returns the id of the evicted project, if any.
    pub fn insert(&self, project: Arc<Project>) -> Option<ProjectId> {
        let mut inner = self.inner.lock().unwrap();
        inner.clock += 1;
        let tick = inner.clock;

        inner.entries.insert(
            project.id(),
            StoreEntry {
                project,
                last_access: tick,
            },
        );

        if inner.entries.len() > self.max_entries {
            let victim = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(id, _)| *id);
            if let Some(victim_id) = victim {
                inner.entries.remove(&victim_id);
                tracing::debug!(project_id = victim_id, "evicted least recently used project");
                return Some(victim_id);
            }
        }
        None
    }

    /// Remove a project by id. Absent ids are a no-op.
    pub fn remove(&self, id: ProjectId) -> Option<Arc<Project>> {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.remove(&id).map(|entry| entry.project)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
