// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waiting for a trigger time
//!
//! Eclipse events are single-occurrence: late triggering is recoverable,
//! waiting a full day for a mis-resolved target is not. The policy is
//! therefore three-tiered: a target passed by up to 30s counts as reached
//! (clock skew tolerance), passed by more than 30s but under 12 hours is
//! assumed missed and triggers immediately, and passed by 12 hours or
//! more is reinterpreted as tomorrow.

use tokio::sync::watch;

use umbra_core::{format_duration, Clock, TimeOfDay, SECONDS_PER_DAY};

use crate::config::ExecutorConfig;

/// How far past a target still counts as reaching it
const SKEW_TOLERANCE_SECS: f64 = 30.0;

/// Beyond this lateness the target is assumed to mean tomorrow
const HALF_DAY_SECS: f64 = 43_200.0;

/// The wait was interrupted by a shutdown request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// What the wait loop should do for one clock sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WaitStep {
    /// Target reached (delta is seconds early/late, for logging)
    Reached { delta: f64 },
    /// Target missed by `late_by` seconds; proceed immediately
    ProceedLate { late_by: f64 },
    /// Keep waiting, `remaining` seconds to go
    Wait { remaining: f64 },
}

/// Classify one clock sample against the target
pub(crate) fn classify(now: f64, target_secs: f64) -> WaitStep {
    let remaining = target_secs - now;

    if (-SKEW_TOLERANCE_SECS..=0.0).contains(&remaining) {
        return WaitStep::Reached { delta: remaining };
    }

    if remaining < -SKEW_TOLERANCE_SECS {
        if remaining.abs() < HALF_DAY_SECS {
            return WaitStep::ProceedLate {
                late_by: remaining.abs(),
            };
        }
        // Target is tomorrow
        return WaitStep::Wait {
            remaining: remaining + SECONDS_PER_DAY as f64,
        };
    }

    WaitStep::Wait { remaining }
}

/// Block until the target time is reached, polling the clock
///
/// Reports progress on long waits and returns early with `Cancelled` when
/// the shutdown channel fires.
pub async fn wait_until<C: Clock>(
    clock: &C,
    shutdown: &mut watch::Receiver<bool>,
    target: TimeOfDay,
    config: &ExecutorConfig,
) -> Result<(), Cancelled> {
    tracing::info!(%target, "waiting until target time");

    let target_secs = f64::from(target.as_seconds());
    let progress_secs = config.progress_interval.as_secs_f64();
    let mut since_progress = 0.0;

    loop {
        if *shutdown.borrow() {
            tracing::info!(%target, "wait interrupted by shutdown");
            return Err(Cancelled);
        }

        match classify(clock.now(), target_secs) {
            WaitStep::Reached { delta } => {
                tracing::info!(%target, delta, "target time reached");
                return Ok(());
            }
            WaitStep::ProceedLate { late_by } => {
                tracing::warn!(
                    %target,
                    late_by = %format_duration(late_by as i64),
                    "target time already passed, proceeding"
                );
                return Ok(());
            }
            WaitStep::Wait { remaining } => {
                if remaining > progress_secs && since_progress >= progress_secs {
                    tracing::info!(
                        %target,
                        remaining = %format_duration(remaining as i64),
                        "waiting"
                    );
                    since_progress = 0.0;
                }
            }
        }

        tokio::select! {
            _ = clock.sleep(config.poll_interval) => {
                since_progress += config.poll_interval.as_secs_f64();
            }
            _ = shutdown.changed() => {}
        }
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
