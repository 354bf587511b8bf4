// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable wall-clock time handling
//!
//! Scheduling works in local time of day, so the clock reports fractional
//! seconds since local midnight rather than a monotonic instant. Sleeping
//! goes through the same trait so tests can advance a fake clock instead
//! of waiting.

use async_trait::async_trait;
use chrono::Timelike;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::timeofday::SECONDS_PER_DAY;

/// A clock that provides the current local time of day
#[async_trait]
pub trait Clock: Clone + Send + Sync + 'static {
    /// Fractional seconds since local midnight, in [0, 86400)
    fn now(&self) -> f64;

    /// Sleep for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> f64 {
        let t = chrono::Local::now().time();
        f64::from(t.num_seconds_from_midnight()) + f64::from(t.nanosecond()) / 1e9
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fake clock for testing with controllable time
///
/// `sleep` advances the clock instead of waiting, so polling loops built
/// on the trait converge instantly under test.
#[derive(Clone)]
pub struct FakeClock {
    seconds: Arc<Mutex<f64>>,
}

impl FakeClock {
    /// Create a fake clock at midnight
    pub fn new() -> Self {
        Self {
            seconds: Arc::new(Mutex::new(0.0)),
        }
    }

    /// Create a fake clock at the given seconds since midnight
    pub fn at(seconds: f64) -> Self {
        Self {
            seconds: Arc::new(Mutex::new(seconds)),
        }
    }

    /// Advance the clock by the given number of seconds
    pub fn advance(&self, seconds: f64) {
        let mut current = self.seconds.lock().unwrap_or_else(|e| e.into_inner());
        *current += seconds;
    }

    /// Set the clock to a specific seconds-since-midnight value
    pub fn set(&self, seconds: f64) {
        let mut current = self.seconds.lock().unwrap_or_else(|e| e.into_inner());
        *current = seconds;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for FakeClock {
    fn now(&self) -> f64 {
        let current = *self.seconds.lock().unwrap_or_else(|e| e.into_inner());
        current.rem_euclid(SECONDS_PER_DAY as f64)
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration.as_secs_f64());
        // Real suspension point so concurrent tasks can interleave
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
