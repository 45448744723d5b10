//! Constants used throughout configlake.
//!
//! Centralizes endpoint templates, environment variable names and defaults.

use std::time::Duration;

/// Fixed timeout applied to every API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!("configlake/", env!("CARGO_PKG_VERSION"));

/// Endpoint prefix for plain-text configurations.
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Endpoint prefix for encrypted secrets.
pub const SECRETS_ENDPOINT: &str = "/api/secrets";

/// Endpoint prefix for configurations plus server-decrypted secrets.
pub const ALL_ENDPOINT: &str = "/api/all";

/// Settings directory relative to HOME (~/.configlake).
pub const SETTINGS_DIR: &str = ".configlake";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "config.toml";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "CONFIGLAKE_LOG";

/// Environment variable holding the server base URL.
pub const URL_ENV: &str = "CONFIGLAKE_URL";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "CONFIGLAKE_TOKEN";

/// Environment variable holding the project ID.
pub const PROJECT_ENV: &str = "CONFIGLAKE_PROJECT";

/// Environment variable holding the environment name.
pub const ENVIRONMENT_ENV: &str = "CONFIGLAKE_ENV";

/// Environment variable pointing at an alternate settings file.
pub const SETTINGS_ENV: &str = "CONFIGLAKE_CONFIG";
