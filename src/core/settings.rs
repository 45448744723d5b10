//! Connection settings for the command-line client.
//!
//! Handles reading `~/.configlake/config.toml` and layering command-line and
//! environment overrides on top of it. The library operations never read
//! settings themselves; the CLI resolves them once and passes them down.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Connection, Target};
use crate::core::types::ProjectId;
use crate::error::{Error, Result};

/// Settings file contents. Every field is optional.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Server base URL
    #[serde(default)]
    pub url: Option<String>,
    /// API token
    #[serde(default)]
    pub token: Option<String>,
    /// Project ID
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Environment name
    #[serde(default)]
    pub environment: Option<String>,
}

impl Settings {
    /// Default settings file location (`~/.configlake/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(constants::SETTINGS_DIR)
            .join(constants::SETTINGS_FILE)
    }

    /// Load settings from a TOML file.
    ///
    /// A missing file yields empty settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file exists but cannot be read, or
    /// `Error::TomlParse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("settings file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Layer `overrides` on top of these settings; set fields win.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            url: overrides.url.or(self.url),
            token: overrides.token.or(self.token),
            project_id: overrides.project_id.or(self.project_id),
            environment: overrides.environment.or(self.environment),
        }
    }

    /// Build the connection described by these settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Settings` if the URL or token is missing, or the URL
    /// is not http(s).
    pub fn connection(&self) -> Result<Connection> {
        let url = non_empty(self.url.as_deref()).ok_or_else(|| {
            Error::Settings(format!(
                "no server URL (pass --url or set {})",
                constants::URL_ENV
            ))
        })?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Settings(format!(
                "server URL must start with http:// or https://: {}",
                url
            )));
        }
        let token = non_empty(self.token.as_deref()).ok_or_else(|| {
            Error::Settings(format!(
                "no API token (pass --token or set {})",
                constants::TOKEN_ENV
            ))
        })?;
        Ok(Connection::new(url, token))
    }

    /// Build the project/environment target described by these settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Settings` if either part is missing.
    pub fn target(&self) -> Result<Target> {
        let project_id = self.project_id.ok_or_else(|| {
            Error::Settings(format!(
                "no project ID (pass --project or set {})",
                constants::PROJECT_ENV
            ))
        })?;
        let environment = non_empty(self.environment.as_deref()).ok_or_else(|| {
            Error::Settings(format!(
                "no environment (pass --env or set {})",
                constants::ENVIRONMENT_ENV
            ))
        })?;
        Ok(Target::new(project_id, environment))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .field("environment", &self.environment)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
