//! Fetch operations.
//!
//! The three public entry points of the library. Each one issues a single
//! request through [`crate::core::http`] and, for the secrets endpoint,
//! decrypts the values locally.
//!
//! Every operation comes in two shapes: one taking a [`Connection`] and a
//! [`Target`], and a flat one taking the four raw parameters.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::{self, Fernet};
use crate::core::domain::{AllDetails, Connection, Target};
use crate::core::http::{self, Payload};
use crate::core::types::{ConfigSet, EncryptedSecretSet, ProjectId, SecretSet};
use crate::error::{Error, Result};

/// Fetch plain-text configurations.
///
/// Returns an empty set when the response has no `configs` field.
pub fn fetch_config(conn: &Connection, target: &Target) -> Result<ConfigSet> {
    let mut payload = http::get(conn, &target.config_path())?;
    let configs: ConfigSet = take_field(&mut payload, "configs")?;
    debug!(selector = %target, count = configs.len(), "fetched configs");
    Ok(configs)
}

/// Fetch secrets and decrypt them with the environment key from the same
/// response.
///
/// # Errors
///
/// Returns `Error::Configuration` if the response carries no usable
/// `environment_key`; nothing is decrypted in that case. Returns
/// `Error::Decryption` for the first secret that fails to decrypt.
pub fn fetch_secrets(conn: &Connection, target: &Target) -> Result<SecretSet> {
    let mut payload = http::get(conn, &target.secrets_path())?;

    let environment_key = Zeroizing::new(take_environment_key(&mut payload)?);
    let encrypted: EncryptedSecretSet = take_field(&mut payload, "secrets")?;
    if encrypted.is_empty() {
        debug!(selector = %target, "no secrets to decrypt");
        return Ok(SecretSet::new());
    }

    let fernet = Fernet::new(&environment_key)?;
    let secrets = encrypted
        .iter()
        .map(|(key, value)| Ok((key.clone(), decrypt_value(&fernet, key, value)?)))
        .collect::<Result<SecretSet>>()?;

    debug!(selector = %target, count = secrets.len(), "decrypted secrets");
    Ok(secrets)
}

/// Fetch configurations and secrets from the combined endpoint.
///
/// The server decrypts secrets itself for this endpoint, so they are
/// returned exactly as received. Unlike [`fetch_secrets`], nothing here
/// verifies them. Callers that need client-side decryption should use
/// [`fetch_secrets`] instead.
pub fn fetch_all_details(conn: &Connection, target: &Target) -> Result<AllDetails> {
    let mut payload = http::get(conn, &target.all_path())?;

    let details = AllDetails {
        configs: take_field(&mut payload, "configs")?,
        secrets: take_field(&mut payload, "secrets")?,
        project_id: take_field(&mut payload, "project_id")?,
        environment: take_field(&mut payload, "environment")?,
    };

    debug!(
        selector = %target,
        configs = details.configs.len(),
        secrets = details.secrets.len(),
        "fetched all details"
    );
    Ok(details)
}

/// Get plain-text configurations for a project environment.
pub fn get_config(
    base_url: &str,
    token: &str,
    project_id: ProjectId,
    environment: &str,
) -> Result<ConfigSet> {
    fetch_config(
        &Connection::new(base_url, token),
        &Target::new(project_id, environment),
    )
}

/// Get decrypted secrets for a project environment.
pub fn get_secrets(
    base_url: &str,
    token: &str,
    project_id: ProjectId,
    environment: &str,
) -> Result<SecretSet> {
    fetch_secrets(
        &Connection::new(base_url, token),
        &Target::new(project_id, environment),
    )
}

/// Get configurations and server-decrypted secrets for a project environment.
pub fn get_all_details(
    base_url: &str,
    token: &str,
    project_id: ProjectId,
    environment: &str,
) -> Result<AllDetails> {
    fetch_all_details(
        &Connection::new(base_url, token),
        &Target::new(project_id, environment),
    )
}

/// Remove and decode a field, defaulting when it is absent or null.
fn take_field<T>(payload: &mut Payload, name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match payload.remove(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| Error::InvalidResponse(format!("field `{}`: {}", name, e))),
    }
}

/// Decrypt one wire value. A value that is not a string cannot be a token.
fn decrypt_value(fernet: &Fernet, key: &str, value: &Value) -> Result<String> {
    let token = value.as_str().ok_or_else(|| {
        Error::Decryption(format!("secret `{}` is not a string", key))
    })?;
    cipher::decrypt_with(fernet, token)
}

/// Remove the environment key, which must be a non-empty string.
fn take_environment_key(payload: &mut Payload) -> Result<String> {
    match payload.remove("environment_key") {
        Some(Value::String(key)) if !key.is_empty() => Ok(key),
        _ => Err(Error::Configuration(
            "environment key not found in API response".to_string(),
        )),
    }
}
