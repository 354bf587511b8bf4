// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! umbra - eclipse photography controller CLI

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "umbra",
    version,
    about = "Automated multi-camera eclipse photography"
)]
struct Cli {
    /// Log filter, e.g. "info" or "umbra_engine=debug"
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute an eclipse plan
    Run(commands::run::RunArgs),
    /// Parse and validate a plan, printing the schedule
    Validate(commands::validate::ValidateArgs),
    /// List attached cameras
    Detect(commands::detect::DetectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Validate(args) => commands::validate::validate(args),
        Commands::Detect(args) => commands::detect::detect(args).await,
    }
}
