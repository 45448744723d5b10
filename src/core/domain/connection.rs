//! Connection type.
//!
//! Pairs a server base URL with the bearer token used to reach it.

use std::fmt;

use zeroize::Zeroizing;

/// Where to send a request and how to authenticate it.
///
/// Built by the caller for each call; the client never stores one.
#[derive(Clone)]
pub struct Connection {
    base_url: String,
    token: Zeroizing<String>,
}

impl Connection {
    /// Create a connection from a base URL and an API token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Zeroizing::new(token.into()),
        }
    }

    /// Base URL as supplied by the caller.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Absolute URL for an endpoint path.
    ///
    /// Trailing slashes on the base URL are dropped so that joining with a
    /// path that starts with `/` never yields `//`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
