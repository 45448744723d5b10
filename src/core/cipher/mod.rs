//! Cryptographic operations.
//!
//! Secrets leave the server as Fernet tokens wrapped in one more layer of
//! standard base64. This module unwraps and decrypts them with the
//! per-environment key that accompanies them in the response.
//!
//! ## Adding a New Scheme
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file next to `fernet.rs`
//! 3. Re-export from this module

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::error::{Error, Result};

mod fernet;

pub use fernet::Fernet;

/// Symmetric cipher bound to a single key.
pub trait Cipher {
    /// Encrypt a string, returning the scheme's text token.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decryption` if the key cannot be used.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a text token produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Decryption` if the token is malformed, fails
    /// authentication, or does not decode to UTF-8.
    fn decrypt(&self, encrypted: &str) -> Result<String>;

    /// Scheme name for display.
    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}

/// Decrypt a secret value using the environment key.
///
/// The value is standard base64 around a Fernet token; the key is the
/// url-safe base64 Fernet key sent alongside it.
///
/// # Errors
///
/// Returns `Error::Decryption` on a bad key, bad base64, a tampered or
/// foreign token, or a plaintext that is not UTF-8.
pub fn decrypt_secret(encrypted_value: &str, environment_key: &str) -> Result<String> {
    let fernet = Fernet::new(environment_key)?;
    decrypt_with(&fernet, encrypted_value)
}

/// Encrypt a value the way the server does, so that [`decrypt_secret`]
/// recovers it.
///
/// # Errors
///
/// Returns `Error::Decryption` if the key is not a valid Fernet key.
pub fn encrypt_secret(plaintext: &str, environment_key: &str) -> Result<String> {
    let fernet = Fernet::new(environment_key)?;
    let token = fernet.encrypt(plaintext)?;
    Ok(STANDARD.encode(token))
}

/// Decrypt one wrapped value with an already-parsed key.
pub(crate) fn decrypt_with(fernet: &Fernet, encrypted_value: &str) -> Result<String> {
    trace!(ciphertext_len = encrypted_value.len(), "decrypting secret");

    let token = STANDARD
        .decode(encrypted_value.as_bytes())
        .map_err(|e| Error::Decryption(format!("invalid base64: {}", e)))?;
    let plaintext = fernet.decrypt_token(&token)?;

    trace!(plaintext_len = plaintext.len(), "decrypted secret");

    String::from_utf8(plaintext).map_err(|e| Error::Decryption(format!("UTF-8 error: {}", e)))
}
