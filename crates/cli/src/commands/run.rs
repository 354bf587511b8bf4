// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `umbra run` - execute an eclipse plan

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

use umbra_adapters::{CameraAdapter, CameraId, Gphoto2Adapter};
use umbra_config::load_plan;
use umbra_core::{format_duration, SystemClock};
use umbra_engine::{preflight, select_cameras, ActionExecutor, CameraFleet, ExecutorConfig};

#[derive(Args)]
pub struct RunArgs {
    /// Path to the eclipse plan file
    pub plan: PathBuf,

    /// Simulate captures without firing shutters
    #[arg(long)]
    pub test_mode: bool,

    /// Abort the run on the first failed action
    #[arg(long)]
    pub strict: bool,

    /// Restrict the run to these camera ids
    #[arg(long, num_args = 1..)]
    pub cameras: Option<Vec<u32>>,

    /// Skip the camera readiness check
    #[arg(long)]
    pub skip_preflight: bool,

    /// Print final statistics as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = load_plan(&args.plan)
        .with_context(|| format!("failed to load plan {}", args.plan.display()))?;

    // Hard contact-table check up front; warnings are logged only
    let warnings = config
        .contacts
        .validate()
        .context("invalid contact table")?;
    for warning in warnings {
        tracing::warn!(%warning, "contact table");
    }
    tracing::info!(
        totality = %format_duration(config.contacts.totality_secs()),
        actions = config.actions.len(),
        "plan loaded"
    );

    let test_mode = args.test_mode || config.test_mode;
    if test_mode {
        tracing::info!("test mode enabled, captures will be simulated");
    }

    let adapter = Gphoto2Adapter::new();
    let detected = adapter.detect().await.context("camera detection failed")?;
    if detected.is_empty() {
        bail!("no cameras detected");
    }

    let requested: Option<Vec<CameraId>> = args
        .cameras
        .map(|ids| ids.into_iter().map(CameraId).collect());
    let selected = select_cameras(&detected, requested.as_deref())?;
    tracing::info!(cameras = ?selected, "active cameras");

    let executor_config = ExecutorConfig::default();
    let fleet = CameraFleet::new(adapter, selected, executor_config.device_timeout);

    if config.verification.is_some() && !args.skip_preflight {
        let report = preflight(&fleet).await;
        for warning in &report.warnings {
            tracing::warn!(%warning, "preflight");
        }
        if !report.ready {
            bail!("camera preflight failed");
        }
    }

    // Ctrl-C flips the shutdown flag; the executor stops at the next
    // suspension point and keeps everything captured so far
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(true);
    })
    .context("failed to install signal handler")?;

    let mut executor = ActionExecutor::new(fleet, config.contacts, SystemClock, shutdown_rx)
        .with_test_mode(test_mode)
        .with_strict(args.strict)
        .with_config(executor_config);

    let report = executor.run(&config.actions).await;
    let stats = executor.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Run complete: {}", stats);
    }

    if report.cancelled {
        tracing::info!("run cancelled by shutdown request");
    }
    if stats.execution_errors > 0 {
        bail!("{} action(s) failed", stats.execution_errors);
    }
    Ok(())
}
