//! CryptEnvVar CLI - encrypt small files into environment-variable sized
//! base64 blocks, and rebuild them from those variables.
//!
//! All cryptography lives in the `cryptenvvar` library; this binary only
//! handles arguments, console/file I/O and error reporting.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Mode;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps redirected stdout byte-exact
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(&cli) {
        Ok(Mode::Help) => match commands::write_help(&mut std::io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                warn!(%err, "failed to print help");
                report_failure(&anyhow::Error::new(err).context("failed to print help"))
            }
        },
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

fn report_failure(err: &anyhow::Error) -> ExitCode {
    println!("An error occurred with the software execution: '{err:#}'. See --help for help.");
    ExitCode::FAILURE
}
