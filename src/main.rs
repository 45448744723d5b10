//! Config Lake CLI - fetch configurations and decrypt secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use configlake::cli::output;
use configlake::cli::{execute, Cli};
use configlake::core::constants;
use configlake::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("configlake=debug")
        } else {
            EnvFilter::new("configlake=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let e = match execute(cli.command, cli.connection) {
        Ok(0) => return,
        Ok(code) => std::process::exit(code),
        Err(e) => e,
    };

    let suggestion = match &e {
        Error::Authentication => Some("check the token passed via --token or CONFIGLAKE_TOKEN"),
        Error::Authorization => Some("the token belongs to a different project"),
        Error::NotFound => Some("check --project and --env"),
        Error::Configuration(_) => Some("the server did not return an environment key"),
        Error::Transport(_) => Some("check --url and that the server is reachable"),
        _ => None,
    };

    output::error(&e.to_string());
    if let Some(hint) = suggestion {
        output::hint(hint);
    }
    std::process::exit(1);
}
