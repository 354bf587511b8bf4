// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `umbra validate` - check a plan and print the schedule

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use umbra_config::load_plan;
use umbra_core::{format_duration, resolve, Contact};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the eclipse plan file
    pub plan: PathBuf,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let config = load_plan(&args.plan)
        .with_context(|| format!("failed to load plan {}", args.plan.display()))?;

    let warnings = config
        .contacts
        .validate()
        .context("invalid contact table")?;

    println!("Contacts:");
    for contact in Contact::ALL {
        println!("  {:>3}  {}", contact.to_string(), config.contacts.get(contact));
    }
    println!(
        "Totality: {}",
        format_duration(config.contacts.totality_secs())
    );

    for warning in &warnings {
        println!("Warning: {}", warning);
    }

    println!("Actions:");
    for (index, action) in config.actions.iter().enumerate() {
        let trigger = resolve(action.start(), &config.contacts);
        println!("  {:>2}. [{}] {}", index + 1, trigger, action);
    }

    println!("Plan OK ({} actions)", config.actions.len());
    Ok(())
}
