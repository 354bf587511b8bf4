// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ActionExecutor - drives photographic actions at their trigger times
//!
//! Actions run strictly in configuration order, one at a time. Each action
//! moves through configure -> wait -> capture (-> loop); a failure is
//! counted and the sequence continues unless strict mode was requested.
//! The shutdown channel is honored between actions, inside waits, and
//! between loop iterations; in-flight device calls always complete.

use std::time::Duration;
use tokio::sync::watch;

use umbra_adapters::CameraAdapter;
use umbra_core::{
    difference, resolve, ActionSpec, Clock, ContactTable, ExecutionStats, ExposureSettings,
    TimeSpec, SECONDS_PER_DAY,
};

use crate::config::ExecutorConfig;
use crate::error::EngineError;
use crate::fleet::CameraFleet;
use crate::wait::wait_until;

/// Poll cadence inside capture loops
const LOOP_POLL: Duration = Duration::from_millis(100);

/// Result of executing one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran to completion
    Completed,
    /// The action failed; the failure has been counted
    Failed,
    /// A shutdown request stopped the action early
    Cancelled,
}

/// Summary of one run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-action outcomes, in execution order
    pub outcomes: Vec<ActionOutcome>,
    /// Whether the run stopped early on a shutdown request
    pub cancelled: bool,
}

/// Executes a sequence of photographic actions against a camera fleet
pub struct ActionExecutor<A, C> {
    fleet: CameraFleet<A>,
    contacts: ContactTable,
    clock: C,
    config: ExecutorConfig,
    test_mode: bool,
    strict: bool,
    shutdown: watch::Receiver<bool>,
    stats: ExecutionStats,
}

impl<A: CameraAdapter, C: Clock> ActionExecutor<A, C> {
    pub fn new(
        fleet: CameraFleet<A>,
        contacts: ContactTable,
        clock: C,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            fleet,
            contacts,
            clock,
            config: ExecutorConfig::default(),
            test_mode: false,
            strict: false,
            shutdown,
            stats: ExecutionStats::new(),
        }
    }

    /// Simulate captures instead of firing shutters
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Abort the run on the first failed action
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> ExecutionStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Execute all actions in configuration order
    pub async fn run(&mut self, actions: &[ActionSpec]) -> RunReport {
        let mut outcomes = Vec::with_capacity(actions.len());
        let mut cancelled = false;

        for (index, action) in actions.iter().enumerate() {
            if *self.shutdown.borrow() {
                tracing::info!(index, "shutdown requested, stopping run");
                cancelled = true;
                break;
            }

            let outcome = self.execute(index, action).await;
            let stop = match outcome {
                ActionOutcome::Cancelled => {
                    cancelled = true;
                    true
                }
                ActionOutcome::Failed => self.strict,
                ActionOutcome::Completed => false,
            };
            outcomes.push(outcome);
            if stop {
                if !cancelled {
                    tracing::error!(index, "strict mode: aborting run after failed action");
                }
                break;
            }
        }

        tracing::info!(stats = %self.stats, "run finished");
        RunReport {
            outcomes,
            cancelled,
        }
    }

    /// Execute a single action and update statistics
    pub async fn execute(&mut self, index: usize, action: &ActionSpec) -> ActionOutcome {
        tracing::info!(index, kind = action.kind(), "executing action: {}", action);

        let outcome = match action {
            ActionSpec::SingleShot { start, exposure } => self.single_shot(start, exposure).await,
            ActionSpec::BoundedLoop {
                start,
                end,
                interval_secs,
                exposure,
            } => self.bounded_loop(start, end, *interval_secs, exposure).await,
            ActionSpec::CountedInterval {
                start,
                end,
                count,
                exposure,
            } => self.counted_interval(start, end, *count, exposure).await,
        };

        match outcome {
            ActionOutcome::Completed => {
                self.stats.record_action();
                tracing::info!(index, "action completed");
            }
            ActionOutcome::Failed => {
                self.stats.record_error();
                tracing::error!(index, kind = action.kind(), "action failed");
            }
            ActionOutcome::Cancelled => {
                tracing::info!(index, "action cancelled");
            }
        }
        outcome
    }

    async fn single_shot(&mut self, start: &TimeSpec, exposure: &ExposureSettings) -> ActionOutcome {
        let trigger = resolve(start, &self.contacts);
        tracing::info!(%trigger, "photo action scheduled");

        self.configure(exposure).await;

        if exposure.mlu_delay_ms > 0 {
            self.mirror_lockup(exposure.mlu_delay_ms).await;
        }

        if self.wait(trigger).await.is_err() {
            return ActionOutcome::Cancelled;
        }

        let successes = self.capture_once().await;
        if successes > 0 {
            ActionOutcome::Completed
        } else {
            tracing::error!("all photo captures failed");
            ActionOutcome::Failed
        }
    }

    async fn bounded_loop(
        &mut self,
        start: &TimeSpec,
        end: &TimeSpec,
        interval_secs: f64,
        exposure: &ExposureSettings,
    ) -> ActionOutcome {
        let start_t = resolve(start, &self.contacts);
        let end_t = resolve(end, &self.contacts);
        let duration = difference(start_t, end_t);
        tracing::info!(%start_t, %end_t, interval_secs, "loop action");

        if duration <= 0 {
            let err = EngineError::NonPositiveDuration {
                start: start_t,
                end: end_t,
            };
            tracing::error!(error = %err, "loop action rejected");
            return ActionOutcome::Failed;
        }

        self.configure(exposure).await;

        if self.wait(start_t).await.is_err() {
            return ActionOutcome::Cancelled;
        }

        let origin = self.clock.now();
        let end_secs = f64::from(end_t.as_seconds());
        let mut next_slot = 0.0;
        let mut captures = 0u64;

        loop {
            if *self.shutdown.borrow() {
                tracing::info!(captures, "loop interrupted by shutdown");
                return ActionOutcome::Cancelled;
            }

            let now = self.clock.now();
            if now >= end_secs {
                break;
            }

            if elapsed_since(origin, now) >= next_slot {
                tracing::info!(capture = captures + 1, "loop capture");
                if exposure.mlu_delay_ms > 0 {
                    self.mirror_lockup(exposure.mlu_delay_ms).await;
                }
                let successes = self.capture_once().await;
                captures += 1;
                if successes == 0 {
                    tracing::warn!(iteration = captures, "all captures failed in loop iteration");
                }
                next_slot += interval_secs;
            }

            self.nap(LOOP_POLL).await;
        }

        tracing::info!(captures, "loop action complete");
        if captures > 0 {
            ActionOutcome::Completed
        } else {
            ActionOutcome::Failed
        }
    }

    async fn counted_interval(
        &mut self,
        start: &TimeSpec,
        end: &TimeSpec,
        count: u32,
        exposure: &ExposureSettings,
    ) -> ActionOutcome {
        let start_t = resolve(start, &self.contacts);
        let end_t = resolve(end, &self.contacts);
        let duration = difference(start_t, end_t);

        if duration <= 0 {
            let err = EngineError::NonPositiveDuration {
                start: start_t,
                end: end_t,
            };
            tracing::error!(error = %err, "interval action rejected");
            return ActionOutcome::Failed;
        }

        if count <= 1 {
            // One photo: degenerate to a single shot at the start time
            return self.single_shot(start, exposure).await;
        }

        // Distribute evenly with both endpoints included
        let interval_secs = duration as f64 / f64::from(count - 1);
        tracing::info!(count, %start_t, %end_t, interval_secs, "interval action");

        self.configure(exposure).await;

        if self.wait(start_t).await.is_err() {
            return ActionOutcome::Cancelled;
        }

        let origin = self.clock.now();

        for i in 0..count {
            if *self.shutdown.borrow() {
                tracing::info!(done = i, "interval interrupted by shutdown");
                return ActionOutcome::Cancelled;
            }

            tracing::info!("interval capture {}/{}", i + 1, count);
            if exposure.mlu_delay_ms > 0 {
                self.mirror_lockup(exposure.mlu_delay_ms).await;
            }
            let successes = self.capture_once().await;
            if successes == 0 {
                tracing::warn!(iteration = i + 1, "all captures failed in interval iteration");
            }

            // Sleep to the next absolute slot rather than a relative
            // interval, so timing error never accumulates
            if i + 1 < count {
                let target_elapsed = f64::from(i + 1) * interval_secs;
                loop {
                    if *self.shutdown.borrow() {
                        return ActionOutcome::Cancelled;
                    }
                    let sleep_for = target_elapsed - elapsed_since(origin, self.clock.now());
                    if sleep_for <= 0.0 {
                        break;
                    }
                    // Floor keeps float dust from stalling the slot loop;
                    // overshooting a slot by a millisecond is harmless
                    let chunk = sleep_for.clamp(1e-3, self.config.poll_interval.as_secs_f64());
                    self.nap(Duration::from_secs_f64(chunk)).await;
                }
            }
        }

        tracing::info!(count, "interval action complete");
        ActionOutcome::Completed
    }

    /// Best-effort settings fan-out; partial failure does not abort
    async fn configure(&self, exposure: &ExposureSettings) {
        let settings = exposure.to_camera_settings();
        let results = self.fleet.configure_all(&settings).await;
        let failed: Vec<_> = results
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(id, _)| *id)
            .collect();
        if !failed.is_empty() {
            tracing::warn!(?failed, "camera configuration failed for some cameras");
        }
    }

    /// Engage mirror lockup everywhere, then hold for the settle delay
    async fn mirror_lockup(&self, delay_ms: u64) {
        tracing::info!(delay_ms, "applying mirror lockup");
        self.fleet.mirror_lockup_all(delay_ms).await;
        self.clock.sleep(Duration::from_millis(delay_ms)).await;
    }

    /// One capture fan-out; returns the number of devices that succeeded
    async fn capture_once(&mut self) -> u64 {
        let results = self.fleet.capture_all(self.test_mode).await;
        let successes = results.values().filter(|r| r.is_some()).count() as u64;
        self.stats.record_photos(successes);
        successes
    }

    async fn wait(&mut self, target: umbra_core::TimeOfDay) -> Result<(), crate::wait::Cancelled> {
        wait_until(&self.clock, &mut self.shutdown, target, &self.config).await
    }

    /// Interruptible sleep; shutdown is observed at the next loop check
    async fn nap(&mut self, duration: Duration) {
        tokio::select! {
            _ = self.clock.sleep(duration) => {}
            _ = self.shutdown.changed() => {}
        }
    }
}

/// Seconds elapsed between two clock samples, wrapping across midnight
fn elapsed_since(origin: f64, now: f64) -> f64 {
    (now - origin).rem_euclid(SECONDS_PER_DAY as f64)
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
