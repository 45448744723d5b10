//! Test fixtures and constants.

use configlake::{encrypt_secret, Fernet};
use serde_json::json;

/// API token accepted by the mock server.
pub const TOKEN: &str = "cl_test_token_123";

/// Default project ID.
pub const PROJECT: u64 = 7;

/// Default environment name.
pub const ENV: &str = "prod";

/// Plain-text configs used across tests.
pub const STANDARD_CONFIGS: &[(&str, &str)] = &[
    ("APP_NAME", "lake-demo"),
    ("LOG_LEVEL", "info"),
    ("MAX_CONNECTIONS", "25"),
];

/// Secret values used across tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://app:pw@localhost/app"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
];

/// Fernet reference key.
pub const REFERENCE_KEY: &str = "cw_0x689RpI-jtRR7oE8h_eQsKImvJapLeSbXpwF4e4=";

/// "hello" under [`REFERENCE_KEY`], wrapped in standard base64 the way the
/// server sends it.
pub const REFERENCE_WRAPPED_HELLO: &str = "Z0FBQUFBQWR3SjZ3QUFFQ0F3UUZCZ2NJQ1FvTERBME9EeTAyMWNwR1ZXS1pfZUV3Q0dNNEJMTEZfNUNWOWRPUG1yaHVWVVBnSm9id096N0pjYm1yUjY0alZtcFU0SXdxREE9PQ==";

pub fn config_path() -> String {
    format!("/api/config/{}/{}", PROJECT, ENV)
}

pub fn secrets_path() -> String {
    format!("/api/secrets/{}/{}", PROJECT, ENV)
}

pub fn all_path() -> String {
    format!("/api/all/{}/{}", PROJECT, ENV)
}

/// `{"configs": {...}}` body.
pub fn configs_body(configs: &[(&str, &str)]) -> String {
    json!({ "configs": to_object(configs) }).to_string()
}

/// Secrets endpoint body with every value encrypted under `key`.
pub fn secrets_body(key: &str, secrets: &[(&str, &str)]) -> String {
    let encrypted: Vec<(String, String)> = secrets
        .iter()
        .map(|(k, v)| {
            let wrapped = encrypt_secret(v, key).expect("fixture key is valid");
            (k.to_string(), wrapped)
        })
        .collect();
    let mut map = serde_json::Map::new();
    for (k, v) in encrypted {
        map.insert(k, v.into());
    }
    json!({ "environment_key": key, "secrets": map }).to_string()
}

/// Combined endpoint body; secrets are sent as plain text.
pub fn all_body(configs: &[(&str, &str)], secrets: &[(&str, &str)]) -> String {
    json!({
        "configs": to_object(configs),
        "secrets": to_object(secrets),
        "project_id": PROJECT,
        "environment": ENV,
    })
    .to_string()
}

/// Fresh random environment key.
pub fn new_key() -> String {
    Fernet::generate_key()
}

fn to_object(pairs: &[(&str, &str)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), (*v).into());
    }
    serde_json::Value::Object(map)
}
