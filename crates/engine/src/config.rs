// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor tuning knobs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing parameters for the wait and fan-out machinery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// How often the wait loop samples the clock
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// How often a long wait reports progress
    #[serde(with = "humantime_serde")]
    pub progress_interval: Duration,
    /// Per-device cap on one configure/capture call
    #[serde(with = "humantime_serde")]
    pub device_timeout: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            progress_interval: Duration::from_secs(20),
            device_timeout: Duration::from_secs(30),
        }
    }
}
