//! Config Lake - fetch configurations and decrypt secrets.
//!
//! A small blocking client for a Config Lake server. Each operation performs
//! one authenticated GET and, for the secrets endpoint, decrypts the returned
//! Fernet tokens with the environment key sent alongside them.
//!
//! ```no_run
//! let configs = configlake::get_config("https://lake.example.com", "cl_token", 7, "prod")?;
//! let secrets = configlake::get_secrets("https://lake.example.com", "cl_token", 7, "prod")?;
//! # Ok::<(), configlake::Error>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── fetch         # config / secrets / all / get
//! │   ├── run           # Run with injected values
//! │   └── completions   # Shell completions
//! ├── core/             # Library components
//! │   ├── http          # Request executor
//! │   ├── cipher/       # Fernet decryption
//! │   ├── client        # get_config / get_secrets / get_all_details
//! │   ├── domain        # Connection, Target, AllDetails
//! │   ├── env           # .env rendering
//! │   └── settings      # ~/.configlake/config.toml
//! ├── compat            # camelCase aliases
//! └── error             # Error taxonomy
//! ```
//!
//! # Security note
//!
//! The environment key travels in the same response as the ciphertext it
//! unlocks, so decryption adds no confidentiality against anyone who can read
//! that response. `get_all_details` goes further and receives secrets already
//! decrypted by the server, without any client-side verification.

pub mod cli;
pub mod compat;
pub mod core;
pub mod error;

pub use crate::compat::{getAllDetails, getConfig, getSecrets};
pub use crate::core::cipher::{decrypt_secret, encrypt_secret, Cipher, Fernet};
pub use crate::core::client::{
    fetch_all_details, fetch_config, fetch_secrets, get_all_details, get_config, get_secrets,
};
pub use crate::core::domain::{AllDetails, Connection, Target};
pub use crate::core::types::{ConfigSet, ProjectId, SecretSet};
pub use crate::error::{Error, Result};
