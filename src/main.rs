//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `conformity_services` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use conformity_services::config::BINARY_NAME;
use conformity_services::initialization::init_logger_with;
use conformity_services::{error_summary, run_query, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Invalid or missing arguments exit here with clap's usage status
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::try_from(cli).context("Failed to build the services endpoint")?;

    match run_query(&config).await {
        Ok(report) => {
            // A failed write was already reported; it does not change the exit status
            if let Some(line) = report.confirmation(&config.filename) {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} error: {}", BINARY_NAME, error_summary(&e));
            process::exit(1);
        }
    }
}
