//! Error types.
//!
//! Every failure the client can produce is a variant of [`Error`]. The first
//! six variants are the domain taxonomy callers are expected to match on;
//! the rest cover transport and CLI plumbing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The server rejected the bearer token (HTTP 401).
    #[error("authentication failed - invalid API token")]
    Authentication,

    /// The token is valid but not for this project (HTTP 403).
    #[error("access forbidden - token not valid for this project")]
    Authorization,

    /// Unknown project or environment (HTTP 404).
    #[error("resource not found - check project ID and environment name")]
    NotFound,

    /// Any other non-200 response.
    #[error("API request failed: {status} {body}")]
    Request { status: u16, body: String },

    /// The secrets response is unusable, e.g. it carries no environment key.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A secret could not be decoded, authenticated or decrypted.
    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status associated with this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication => Some(401),
            Self::Authorization => Some(403),
            Self::NotFound => Some(404),
            Self::Request { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
