//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// Numeric project identifier assigned by the server.
pub type ProjectId = u64;

/// A config or secret key name (e.g., DATABASE_URL).
pub type Key = String;

/// A secret value as sent by the secrets endpoint. Expected to be a
/// base64-wrapped Fernet token; anything else fails decryption.
pub type EncryptedValue = serde_json::Value;

/// Plain-text configuration values keyed by name.
pub type ConfigSet = BTreeMap<Key, String>;

/// Decrypted secret values keyed by name.
pub type SecretSet = BTreeMap<Key, String>;

/// Secrets as they arrive on the wire, still encrypted.
pub type EncryptedSecretSet = BTreeMap<Key, EncryptedValue>;
