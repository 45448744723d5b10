//! Run command.
//!
//! Executes a command with configs and decrypted secrets injected as
//! environment variables.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::client;
use crate::core::env::is_env_name;
use crate::core::settings::Settings;
use crate::core::types::{ConfigSet, SecretSet};
use crate::error::{Error, Result};

/// Run a command with configs and secrets injected as environment variables.
///
/// Returns the child's exit code; exiting with it is left to the binary.
pub fn execute(settings: &Settings, command: &[String]) -> Result<i32> {
    let conn = settings.connection()?;
    let target = settings.target()?;

    let configs = client::fetch_config(&conn, &target)?;
    let secrets = client::fetch_secrets(&conn, &target)?;

    run_with_values(configs, secrets, command)
}

/// Spawn `command` with the given values in its environment.
///
/// Secrets override configs of the same name. Keys that are not valid
/// environment variable names are skipped.
fn run_with_values(configs: ConfigSet, secrets: SecretSet, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Settings("no command specified".to_string()))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    for (key, value) in configs {
        if is_env_name(&key) {
            cmd.env(&key, value);
        } else {
            warn!(key = %key, "skipping config that is not a valid env var name");
        }
    }

    // Only our copy is wiped on drop. `Command` keeps its own until it is dropped.
    for (key, value) in secrets {
        let value = Zeroizing::new(value);
        if is_env_name(&key) {
            cmd.env(&key, value.as_str());
        } else {
            warn!(key = %key, "skipping secret that is not a valid env var name");
        }
    }

    debug!(program = %program, "spawning command");
    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
