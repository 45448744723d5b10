//! Fetch commands: config, secrets, all, get.

use std::collections::BTreeMap;

use tracing::info;

use crate::cli::output;
use crate::cli::Format;
use crate::core::client;
use crate::core::domain::AllDetails;
use crate::core::env;
use crate::core::settings::Settings;
use crate::error::{Error, Result};

/// Print plain-text configurations.
pub fn config(settings: &Settings, format: Format) -> Result<()> {
    let target = settings.target()?;
    info!("fetching configs for {}", target);
    let configs = client::fetch_config(&settings.connection()?, &target)?;
    print_set("configs", &configs, format, false)
}

/// Print secrets, decrypted with the environment key.
pub fn secrets(settings: &Settings, format: Format) -> Result<()> {
    let target = settings.target()?;
    info!("fetching secrets for {}", target);
    let secrets = client::fetch_secrets(&settings.connection()?, &target)?;
    print_set("secrets", &secrets, format, true)
}

/// Print configurations and server-decrypted secrets.
pub fn all(settings: &Settings, format: Format) -> Result<()> {
    let target = settings.target()?;
    info!("fetching all details for {}", target);
    let details = client::fetch_all_details(&settings.connection()?, &target)?;

    match format {
        Format::Json => output::data(&serde_json::to_string_pretty(&details)?),
        Format::Env => print!("{}", render_env(&details)),
        Format::Table => {
            output::section("Environment");
            output::kv(
                "project",
                details
                    .project_id
                    .map_or_else(|| "-".to_string(), |id| id.to_string()),
            );
            output::kv("environment", details.environment.as_deref().unwrap_or("-"));
            print_table("configs", &details.configs, false);
            print_table("secrets", &details.secrets, true);
        }
    }

    Ok(())
}

/// Print a single value, looking in configs before secrets.
///
/// Secrets are only fetched when the key is not a config.
pub fn get(settings: &Settings, key: &str) -> Result<()> {
    let conn = settings.connection()?;
    let target = settings.target()?;

    let configs = client::fetch_config(&conn, &target)?;
    if let Some(value) = configs.get(key) {
        output::data(value);
        return Ok(());
    }

    let secrets = client::fetch_secrets(&conn, &target)?;
    match secrets.get(key) {
        Some(value) => {
            output::data(value);
            Ok(())
        }
        None => Err(Error::KeyNotFound(key.to_string())),
    }
}

fn print_set(
    label: &str,
    values: &BTreeMap<String, String>,
    format: Format,
    masked: bool,
) -> Result<()> {
    match format {
        Format::Json => output::data(&serde_json::to_string_pretty(values)?),
        Format::Env => print!(
            "{}",
            env::render(values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        ),
        Format::Table => print_table(label, values, masked),
    }
    Ok(())
}

fn print_table(label: &str, values: &BTreeMap<String, String>, masked: bool) {
    if values.is_empty() {
        println!();
        output::dimmed(&format!("no {}", label));
        return;
    }

    output::section(&format!("{} {}", values.len(), label));
    for (key, value) in values {
        if masked {
            output::kv_masked(key);
        } else {
            output::kv(key, value);
        }
    }
}

/// Configs followed by secrets, in .env format.
fn render_env(details: &AllDetails) -> String {
    let configs = details.configs.iter();
    let secrets = details.secrets.iter();
    env::render(
        configs
            .chain(secrets)
            .map(|(k, v)| (k.as_str(), v.as_str())),
    )
}
