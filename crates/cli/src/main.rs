//! tasktrack command-line entry point
//!
//! Resolves the task file location, opens the task service and runs a single
//! subcommand against it.

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasktrack_core::task::TaskService;

use crate::cli::Cli;
use crate::commands::Outcome;

fn main() -> ExitCode {
    // A .env file in the working directory may set JSON_FILE
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so table output stays clean
    let default_filter = if cli.verbose {
        "tasktrack=debug"
    } else {
        "tasktrack=error"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);
    if let Err(err) = &result {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(commands::exit_status(&result))
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = cli.store_config();
    tracing::debug!("Using task file: {:?}", config.path());

    let mut service = TaskService::open(&config)
        .with_context(|| format!("Failed to open task file {}", config.path().display()))?;

    let mut stdout = std::io::stdout().lock();
    commands::execute(cli.command, &mut service, &mut stdout)
}
