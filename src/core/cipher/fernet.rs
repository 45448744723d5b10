//! Fernet symmetric encryption.
//!
//! Token layout (url-safe base64 on the outside):
//!
//! ```text
//! 0x80 | timestamp (u64 BE) | IV (16) | AES-128-CBC ciphertext | HMAC-SHA256 (32)
//! ```
//!
//! The 32-byte key splits into a signing half and an encryption half. The
//! HMAC covers everything before it and is checked before any decryption.

use std::time::Duration;

use aes::Aes128;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{Error, Result};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type HmacSha256 = Hmac<Sha256>;

const VERSION: u8 = 0x80;
const KEY_LEN: usize = 32;
const HALF_KEY_LEN: usize = 16;
const TIMESTAMP_LEN: usize = 8;
const IV_LEN: usize = 16;
const HEADER_LEN: usize = 1 + TIMESTAMP_LEN + IV_LEN;
const MAC_LEN: usize = 32;
const BLOCK_LEN: usize = 16;

/// Tokens dated further than this into the future fail a TTL check.
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Url-safe base64 that accepts keys and tokens with or without padding.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A Fernet key, split into its signing and encryption halves.
pub struct Fernet {
    signing_key: Zeroizing<[u8; HALF_KEY_LEN]>,
    encryption_key: Zeroizing<[u8; HALF_KEY_LEN]>,
}

impl Fernet {
    /// Parse a url-safe base64 key of 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decryption` if the key is not valid base64 or does
    /// not decode to exactly 32 bytes.
    pub fn new(key: &str) -> Result<Self> {
        let decoded = Zeroizing::new(
            URL_SAFE
                .decode(key.as_bytes())
                .map_err(|e| Error::Decryption(format!("invalid key encoding: {}", e)))?,
        );
        if decoded.len() != KEY_LEN {
            return Err(Error::Decryption(format!(
                "key must be {} url-safe base64-encoded bytes, got {}",
                KEY_LEN,
                decoded.len()
            )));
        }

        let mut signing_key = Zeroizing::new([0u8; HALF_KEY_LEN]);
        let mut encryption_key = Zeroizing::new([0u8; HALF_KEY_LEN]);
        signing_key.copy_from_slice(&decoded[..HALF_KEY_LEN]);
        encryption_key.copy_from_slice(&decoded[HALF_KEY_LEN..]);

        Ok(Self {
            signing_key,
            encryption_key,
        })
    }

    /// Generate a fresh random key, url-safe base64 encoded.
    pub fn generate_key() -> String {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.fill_bytes(&mut bytes[..]);
        URL_SAFE.encode(&bytes[..])
    }

    /// Encrypt bytes into a token stamped with the current time.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);
        let timestamp = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        self.encrypt_at(plaintext, timestamp, iv)
    }

    /// Encrypt with an explicit timestamp and IV.
    pub(crate) fn encrypt_at(
        &self,
        plaintext: &[u8],
        timestamp: u64,
        iv: [u8; IV_LEN],
    ) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "fernet encrypt");

        let ciphertext = Aes128CbcEnc::new_from_slices(&self.encryption_key[..], &iv)
            .map_err(|e| Error::Decryption(format!("invalid encryption key: {}", e)))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut token = Vec::with_capacity(HEADER_LEN + ciphertext.len() + MAC_LEN);
        token.push(VERSION);
        token.extend_from_slice(&timestamp.to_be_bytes());
        token.extend_from_slice(&iv);
        token.extend_from_slice(&ciphertext);

        let mut mac = self.mac()?;
        mac.update(&token);
        token.extend_from_slice(&mac.finalize().into_bytes());

        Ok(URL_SAFE.encode(token))
    }

    /// Authenticate and decrypt a token, ignoring its timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decryption` if the token is malformed, carries an
    /// unknown version, fails the HMAC check, or has bad padding.
    pub fn decrypt_token(&self, token: &[u8]) -> Result<Vec<u8>> {
        self.open(token, None)
    }

    /// Like [`Fernet::decrypt_token`], but also rejects tokens older than
    /// `ttl` or stamped too far in the future.
    pub fn decrypt_with_ttl(&self, token: &[u8], ttl: Duration) -> Result<Vec<u8>> {
        self.open(token, Some(ttl))
    }

    fn open(&self, token: &[u8], ttl: Option<Duration>) -> Result<Vec<u8>> {
        let data = URL_SAFE
            .decode(token)
            .map_err(|e| Error::Decryption(format!("invalid token encoding: {}", e)))?;

        if data.len() < HEADER_LEN + BLOCK_LEN + MAC_LEN {
            return Err(Error::Decryption("token too short".to_string()));
        }
        if data[0] != VERSION {
            return Err(Error::Decryption(format!(
                "unsupported token version: {:#04x}",
                data[0]
            )));
        }

        let (signed, tag) = data.split_at(data.len() - MAC_LEN);
        let mut mac = self.mac()?;
        mac.update(signed);
        mac.verify_slice(tag)
            .map_err(|_| Error::Decryption("signature did not match".to_string()))?;

        let mut stamp = [0u8; TIMESTAMP_LEN];
        stamp.copy_from_slice(&signed[1..1 + TIMESTAMP_LEN]);
        let timestamp = i64::try_from(u64::from_be_bytes(stamp)).unwrap_or(i64::MAX);
        if let Some(ttl) = ttl {
            check_ttl(timestamp, ttl, Utc::now().timestamp())?;
        }

        let iv = &signed[1 + TIMESTAMP_LEN..HEADER_LEN];
        let ciphertext = &signed[HEADER_LEN..];
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(Error::Decryption(
                "ciphertext is not a whole number of blocks".to_string(),
            ));
        }

        trace!(ciphertext_len = ciphertext.len(), "fernet decrypt");

        Aes128CbcDec::new_from_slices(&self.encryption_key[..], iv)
            .map_err(|e| Error::Decryption(format!("invalid encryption key: {}", e)))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Decryption("invalid padding".to_string()))
    }

    fn mac(&self) -> Result<HmacSha256> {
        <HmacSha256 as Mac>::new_from_slice(&self.signing_key[..])
            .map_err(|e| Error::Decryption(format!("invalid signing key: {}", e)))
    }
}

fn check_ttl(timestamp: i64, ttl: Duration, now: i64) -> Result<()> {
    let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    if timestamp.saturating_add(ttl) < now {
        return Err(Error::Decryption("token has expired".to_string()));
    }
    if now.saturating_add(MAX_CLOCK_SKEW_SECS) < timestamp {
        return Err(Error::Decryption(
            "token timestamp is in the future".to_string(),
        ));
    }
    Ok(())
}

impl Cipher for Fernet {
    fn name(&self) -> &'static str {
        "fernet"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    fn decrypt(&self, encrypted: &str) -> Result<String> {
        let plaintext = self.decrypt_token(encrypted.as_bytes())?;
        String::from_utf8(plaintext).map_err(|e| Error::Decryption(format!("UTF-8 error: {}", e)))
    }
}
