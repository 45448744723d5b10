//! Command-line interface.

pub mod completions;
pub mod fetch;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants;
use crate::core::settings::Settings;
use crate::core::types::ProjectId;
use crate::error::Result;

/// Config Lake - fetch configurations and decrypt secrets.
#[derive(Parser)]
#[command(
    name = "configlake",
    about = "Fetch configurations and decrypt secrets from Config Lake",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection options shared by every fetch command.
///
/// Each option falls back to its environment variable, then to the settings
/// file.
#[derive(Args, Default)]
pub struct ConnectionArgs {
    /// Config Lake server URL
    #[arg(long, global = true, env = constants::URL_ENV)]
    pub url: Option<String>,

    /// API token
    #[arg(long, global = true, env = constants::TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Project ID
    #[arg(long, global = true, env = constants::PROJECT_ENV)]
    pub project: Option<ProjectId>,

    /// Environment name (e.g., prod)
    #[arg(long = "env", global = true, env = constants::ENVIRONMENT_ENV)]
    pub environment: Option<String>,

    /// Settings file (default: ~/.configlake/config.toml)
    #[arg(long, global = true, env = constants::SETTINGS_ENV)]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    /// Resolve settings: flags and env vars over the settings file.
    pub fn resolve(self) -> Result<Settings> {
        let path = self.config.unwrap_or_else(Settings::default_path);
        let file = Settings::load(&path)?;
        Ok(file.merge(Settings {
            url: self.url,
            token: self.token,
            project_id: self.project,
            environment: self.environment,
        }))
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print plain-text configurations
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print secrets, decrypted locally
    Secrets {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print configurations and server-decrypted secrets
    All {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print a single value (configs first, then secrets)
    Get {
        /// Key name (e.g., DATABASE_URL)
        key: String,
    },

    /// Run a command with configs and secrets injected as env vars
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output formats for fetched values.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Human-readable table; secret values are masked
    Table,
    /// KEY=value lines
    Env,
    /// Pretty-printed JSON
    Json,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command, returning the process exit code.
///
/// Only `run` can yield a non-zero code without an error: it passes the
/// child's code through.
pub fn execute(command: Command, connection: ConnectionArgs) -> Result<i32> {
    use Command::*;

    match command {
        Config { format } => fetch::config(&connection.resolve()?, format)?,
        Secrets { format } => fetch::secrets(&connection.resolve()?, format)?,
        All { format } => fetch::all(&connection.resolve()?, format)?,
        Get { key } => fetch::get(&connection.resolve()?, &key)?,
        Run { command } => return run::execute(&connection.resolve()?, &command),
        Completions { shell } => completions::execute(shell)?,
    }
    Ok(0)
}
