//! camelCase names kept for callers of the earlier client API.
//!
//! Each one is the same function as its snake_case counterpart.

#![allow(non_snake_case)]

pub use crate::core::client::get_all_details as getAllDetails;
pub use crate::core::client::get_config as getConfig;
pub use crate::core::client::get_secrets as getSecrets;
