//! Project and flow entities as the cache sees them.
//!
//! These are owned by the project-management layer; the cache stores them
//! opaquely and returns them by shared reference. The only structural
//! guarantee the cache gives is that a project visible through it has its
//! flows attached.

/// Numeric identifier of a project. Assigned by the store, never changes.
pub type ProjectId = i64;

/// A named execution graph belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    name: String,
    version: i32,
}

impl Flow {
    /// Create a flow definition.
    pub fn new(name: impl Into<String>, version: i32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Flow name, unique within its project.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the project upload this flow was parsed from.
    pub fn version(&self) -> i32 {
        self.version
    }
}

/// A project as stored and returned by the cache.
///
/// Mutation happens before a project is installed; once a project is visible
/// through the cache it is immutable and replaced wholesale on `put`.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    version: i32,
    active: bool,
    flows: Vec<Flow>,
}

impl Project {
    /// Create a project with the given id and display name.
    ///
    /// New projects start active, at version 0, with no flows attached.
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            version: 0,
            active: true,
            flows: Vec::new(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Display name. Mutable in the store; the cache keys its name index on
    /// whatever name the project carried when it was installed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flows attached by the loader, in upload order.
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Attach flow definitions. Called by the loader before the project is
    /// installed into a cache index.
    pub fn set_flows(&mut self, flows: Vec<Flow>) {
        self.flows = flows;
    }
}
