//! signcfg - resolve Android release-signing configuration.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use signcfg::cli::output;
use signcfg::cli::{execute, Cli};
use signcfg::core::constants;
use signcfg::error::Error;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("signcfg=debug")
        } else {
            EnvFilter::new("signcfg=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.dir) {
        let suggestion = match &e {
            Error::Config(_) => Some(format!("check {} in the module directory", constants::CONFIG_FILE)),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
