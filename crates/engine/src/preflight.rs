// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Camera readiness checks before a run
//!
//! Simple threshold comparisons: a disconnected camera fails preflight,
//! low battery or low card space only warn. Warnings never block the run;
//! the eclipse will not wait for a charger.

use umbra_adapters::CameraAdapter;

use crate::fleet::CameraFleet;

/// Battery percentage below which we warn
const MIN_BATTERY_PERCENT: u8 = 20;

/// Free card space (MB) below which we warn
const MIN_FREE_SPACE_MB: u64 = 100;

/// Outcome of the readiness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightReport {
    /// All cameras connected
    pub ready: bool,
    pub warnings: Vec<String>,
}

/// Check readiness of every camera in the fleet
pub async fn preflight<A: CameraAdapter>(fleet: &CameraFleet<A>) -> PreflightReport {
    tracing::info!("validating cameras");

    let statuses = fleet.status_all().await;
    let mut ready = true;
    let mut warnings = Vec::new();

    let mut ids: Vec<_> = statuses.keys().copied().collect();
    ids.sort();

    for id in ids {
        let status = &statuses[&id];

        if !status.connected {
            tracing::error!(%id, "camera not connected");
            ready = false;
            continue;
        }

        if let Some(battery) = status.battery_percent {
            if battery < MIN_BATTERY_PERCENT {
                let warning = format!("camera {}: low battery ({}%)", id, battery);
                tracing::warn!(%id, battery, "low battery");
                warnings.push(warning);
            }
        }

        if let Some(free) = status.free_space_mb {
            if free < MIN_FREE_SPACE_MB {
                let warning = format!("camera {}: low storage space ({} MB)", id, free);
                tracing::warn!(%id, free_space_mb = free, "low storage space");
                warnings.push(warning);
            }
        }
    }

    if ready {
        tracing::info!(warnings = warnings.len(), "all cameras validated");
    } else {
        tracing::error!("camera validation failed");
    }

    PreflightReport { ready, warnings }
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
