//! Call-counting stub loader for strategy tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::loader::{ProjectLoader, StoreError};
use crate::project::{Flow, Project, ProjectId};

/// Stub store over a fixed set of projects.
///
/// Active projects are served by the active-set and name-mapping queries;
/// any project, active or not, resolves through the id and name fetches.
/// `load_flows` attaches one flow per project so tests can observe
/// hydration. Every method counts its calls.
pub(crate) struct StubLoader {
    projects: Vec<Project>,
    recent_ids: Vec<ProjectId>,
    fetch_delay: Option<Duration>,
    fail_lookups: bool,
    pub by_id_calls: AtomicUsize,
    pub by_name_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    pub active_calls: AtomicUsize,
    pub names_calls: AtomicUsize,
    pub recent_calls: AtomicUsize,
    pub flow_calls: AtomicUsize,
}

impl StubLoader {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            recent_ids: Vec::new(),
            fetch_delay: None,
            fail_lookups: false,
            by_id_calls: AtomicUsize::new(0),
            by_name_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
            active_calls: AtomicUsize::new(0),
            names_calls: AtomicUsize::new(0),
            recent_calls: AtomicUsize::new(0),
            flow_calls: AtomicUsize::new(0),
        }
    }

    /// Ids reported by the recently-used query, in order.
    pub fn with_recent(mut self, ids: Vec<ProjectId>) -> Self {
        self.recent_ids = ids;
        self
    }

    /// Sleep this long inside each single-project fetch, to widen race
    /// windows in concurrency tests.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Make the single-project fetches fail with a store error.
    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    fn find_by_id(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| p.id() == id).cloned()
    }
}

impl ProjectLoader for StubLoader {
    fn fetch_project_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        self.by_id_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err(StoreError::Unavailable("stub store down".into()));
        }
        if let Some(delay) = self.fetch_delay {
            std::thread::sleep(delay);
        }
        Ok(self.find_by_id(id))
    }

    fn fetch_project_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        self.by_name_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err(StoreError::Unavailable("stub store down".into()));
        }
        if let Some(delay) = self.fetch_delay {
            std::thread::sleep(delay);
        }
        Ok(self
            .projects
            .iter()
            .find(|p| p.is_active() && p.name().eq_ignore_ascii_case(name))
            .cloned())
    }

    fn fetch_projects_by_ids(&self, ids: &[ProjectId]) -> Result<Vec<Project>, StoreError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ids.iter().filter_map(|&id| self.find_by_id(id)).collect())
    }

    fn fetch_active_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.active_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .projects
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect())
    }

    fn fetch_all_project_names(&self) -> Result<HashMap<String, ProjectId>, StoreError> {
        self.names_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .projects
            .iter()
            .filter(|p| p.is_active())
            .map(|p| (p.name().to_string(), p.id()))
            .collect())
    }

    fn fetch_recent_projects(&self, count: usize) -> Result<Vec<Project>, StoreError> {
        self.recent_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .recent_ids
            .iter()
            .take(count)
            .filter_map(|&id| self.find_by_id(id))
            .collect())
    }

    fn load_flows(&self, projects: &mut [Project]) -> Result<(), StoreError> {
        self.flow_calls.fetch_add(1, Ordering::SeqCst);
        for project in projects {
            let flow = Flow::new(format!("{}-main", project.name()), project.version());
            project.set_flows(vec![flow]);
        }
        Ok(())
    }
}
