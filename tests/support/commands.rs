//! Command helper methods for Test.

use super::{Test, ENV, PROJECT, TOKEN};
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would leak the caller's settings into a test.
const CONFIGLAKE_VARS: &[&str] = &[
    "CONFIGLAKE_URL",
    "CONFIGLAKE_TOKEN",
    "CONFIGLAKE_PROJECT",
    "CONFIGLAKE_ENV",
    "CONFIGLAKE_CONFIG",
    "CONFIGLAKE_LOG",
];

impl Test {
    /// Create a bare configlake command.
    ///
    /// HOME points at the temp home and every CONFIGLAKE_* variable is
    /// cleared, so only what the test passes is in effect.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("configlake").expect("failed to find configlake binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in CONFIGLAKE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A configlake command with connection flags for the mock server.
    pub fn connected(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "--url",
            &self.url(),
            "--token",
            TOKEN,
            "--project",
            &PROJECT.to_string(),
            "--env",
            ENV,
        ]);
        cmd
    }

    /// Run `configlake <args>` against the mock server.
    pub fn run(&self, args: &[&str]) -> Output {
        self.connected()
            .args(args)
            .output()
            .expect("failed to run configlake")
    }

    /// Write a settings file into the temp home.
    pub fn write_settings(&self, contents: &str) {
        let dir = self.home.path().join(".configlake");
        std::fs::create_dir_all(&dir).expect("failed to create settings dir");
        std::fs::write(dir.join("config.toml"), contents).expect("failed to write settings");
    }
}
