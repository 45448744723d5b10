//! Target type.
//!
//! Selects one project and environment on the server.

use std::fmt;

use crate::core::constants::{ALL_ENDPOINT, CONFIG_ENDPOINT, SECRETS_ENDPOINT};
use crate::core::types::ProjectId;

/// A project/environment pair identifying one configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    project_id: ProjectId,
    environment: String,
}

impl Target {
    /// Create a target for a project ID and environment name.
    pub fn new(project_id: ProjectId, environment: impl Into<String>) -> Self {
        Self {
            project_id,
            environment: environment.into(),
        }
    }

    /// Project ID
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Environment name
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Path of the plain-text configuration endpoint.
    pub fn config_path(&self) -> String {
        self.path(CONFIG_ENDPOINT)
    }

    /// Path of the encrypted secrets endpoint.
    pub fn secrets_path(&self) -> String {
        self.path(SECRETS_ENDPOINT)
    }

    /// Path of the combined endpoint.
    pub fn all_path(&self) -> String {
        self.path(ALL_ENDPOINT)
    }

    fn path(&self, prefix: &str) -> String {
        format!("{}/{}/{}", prefix, self.project_id, self.environment)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.environment)
    }
}
