//! Test support utilities for configlake integration tests.
//!
//! Provides a mock Config Lake server, fixtures, and CLI helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use mockito::{Mock, Server, ServerGuard};
use tempfile::TempDir;

/// Test environment with a mock server and an isolated home directory.
///
/// Each test gets its own server and temp home, so tests can run in
/// parallel without sharing settings files or mocks.
pub struct Test {
    /// Mock Config Lake server
    pub server: ServerGuard,
    /// Temporary home directory (holds `.configlake/config.toml` if written)
    pub home: TempDir,
}

impl Test {
    /// Create a new test environment with an empty mock server.
    pub fn new() -> Self {
        let server = Server::new();
        let home = TempDir::new().expect("failed to create temp home");
        Self { server, home }
    }

    /// Base URL of the mock server.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Mock `GET path` with the given status and body, requiring the test token.
    pub fn mock(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Mock the config endpoint for the default target.
    pub fn mock_config(&mut self, body: &str) -> Mock {
        self.mock(&config_path(), 200, body)
    }

    /// Mock the secrets endpoint for the default target.
    pub fn mock_secrets(&mut self, body: &str) -> Mock {
        self.mock(&secrets_path(), 200, body)
    }

    /// Mock the combined endpoint for the default target.
    pub fn mock_all(&mut self, body: &str) -> Mock {
        self.mock(&all_path(), 200, body)
    }
}
