// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `umbra detect` - list attached cameras

use anyhow::{Context, Result};
use clap::Args;

use umbra_adapters::{CameraAdapter, Gphoto2Adapter};

#[derive(Args)]
pub struct DetectArgs {
    /// Also query battery and storage status
    #[arg(long)]
    pub status: bool,
}

pub async fn detect(args: DetectArgs) -> Result<()> {
    let adapter = Gphoto2Adapter::new();
    let detected = adapter.detect().await.context("camera detection failed")?;

    if detected.is_empty() {
        println!("No cameras detected");
        return Ok(());
    }

    for (id, name) in &detected {
        if args.status {
            let status = adapter.status(*id).await?;
            let battery = status
                .battery_percent
                .map(|b| format!("{}%", b))
                .unwrap_or_else(|| "?".to_string());
            let space = status
                .free_space_mb
                .map(|s| format!("{} MB", s))
                .unwrap_or_else(|| "?".to_string());
            println!("{}: {} (battery {}, free {})", id, name, battery, space);
        } else {
            println!("{}: {}", id, name);
        }
    }

    Ok(())
}
