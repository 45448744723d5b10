//! Core library components.
//!
//! This module contains the request executor, secret decryption, the three
//! fetch operations, and the settings layer used by the CLI.

pub mod cipher;
pub mod client;
pub mod constants;
pub mod domain;
pub mod env;
pub mod http;
pub mod settings;
pub mod types;
