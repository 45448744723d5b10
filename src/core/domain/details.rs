//! Combined result of the `/api/all` endpoint.

use serde::Serialize;

use crate::core::types::{ConfigSet, ProjectId, SecretSet};

/// Configurations and secrets for one environment, as returned by the
/// combined endpoint.
///
/// `secrets` holds whatever the server sent. The combined endpoint decrypts
/// on the server side, so no client-side decryption or verification happens
/// for these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllDetails {
    pub configs: ConfigSet,
    pub secrets: SecretSet,
    /// Project ID echoed by the server, if present.
    pub project_id: Option<ProjectId>,
    /// Environment name echoed by the server, if present.
    pub environment: Option<String>,
}

impl AllDetails {
    /// Look up a key in configs first, then secrets.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.configs
            .get(key)
            .or_else(|| self.secrets.get(key))
            .map(String::as_str)
    }
}
