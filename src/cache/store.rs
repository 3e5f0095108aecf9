//! Shared helper for talking to the project loader.
//!
//! Both strategies compose a [`StoreClient`] instead of inheriting common
//! loader plumbing. It centralizes the degradation policy: single-item
//! fetches convert store failures into logged absent results, while bulk and
//! preload calls keep the `Result` so callers can decide.

use std::collections::HashMap;
use std::sync::Arc;

use crate::loader::{ProjectLoader, StoreError};
use crate::project::{Project, ProjectId};

/// Thin wrapper around the loader shared by both cache strategies.
#[derive(Clone)]
pub(crate) struct StoreClient {
    loader: Arc<dyn ProjectLoader>,
}

impl StoreClient {
    pub fn new(loader: Arc<dyn ProjectLoader>) -> Self {
        Self { loader }
    }

    /// Fetch one project by id, degrading store failures to absent.
    pub fn project_by_id(&self, id: ProjectId) -> Option<Project> {
        match self.loader.fetch_project_by_id(id) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(id, error = %err, "could not load project from store");
                None
            }
        }
    }

    /// Fetch one active project by name, degrading store failures to absent.
    pub fn project_by_name(&self, name: &str) -> Option<Project> {
        match self.loader.fetch_project_by_name(name) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(name, error = %err, "could not load project from store");
                None
            }
        }
    }

    /// Batch fetch by ids. Bulk callers handle store failures explicitly.
    pub fn projects_by_ids(&self, ids: &[ProjectId]) -> Result<Vec<Project>, StoreError> {
        self.loader.fetch_projects_by_ids(ids)
    }

    pub fn active_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.loader.fetch_active_projects()
    }

    pub fn all_project_names(&self) -> Result<HashMap<String, ProjectId>, StoreError> {
        self.loader.fetch_all_project_names()
    }

    /// Recently used projects for the preload; failure degrades to an empty
    /// seed so construction can proceed with a cold cache.
    pub fn recent_projects(&self, count: usize) -> Vec<Project> {
        match self.loader.fetch_recent_projects(count) {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "could not preload recently used projects");
                Vec::new()
            }
        }
    }

    /// Attach flows to every project in the slice in one loader call.
    pub fn load_flows(&self, projects: &mut [Project]) -> Result<(), StoreError> {
        if projects.is_empty() {
            return Ok(());
        }
        self.loader.load_flows(projects)
    }

    /// Fetch one project by id with its flows attached; any failure is
    /// logged and degrades to absent.
    pub fn hydrated_by_id(&self, id: ProjectId) -> Option<Project> {
        let mut project = self.project_by_id(id)?;
        match self.load_flows(std::slice::from_mut(&mut project)) {
            Ok(()) => Some(project),
            Err(err) => {
                tracing::warn!(id, error = %err, "could not load flows for project");
                None
            }
        }
    }

    /// Fetch one project by name with its flows attached; any failure is
    /// logged and degrades to absent.
    pub fn hydrated_by_name(&self, name: &str) -> Option<Project> {
        let mut project = self.project_by_name(name)?;
        match self.load_flows(std::slice::from_mut(&mut project)) {
            Ok(()) => Some(project),
            Err(err) => {
                tracing::warn!(name, error = %err, "could not load flows for project");
                None
            }
        }
    }
}
