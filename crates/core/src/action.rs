// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The photographic action model
//!
//! Three action kinds as a tagged enum: a single shot at one trigger time,
//! a loop capturing at a fixed cadence between two times, and a counted
//! interval distributing N shots evenly between two times. Validation
//! happens at construction so a bad action can never reach the executor.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::exposure::ExposureSettings;
use crate::resolver::TimeSpec;

/// Errors from constructing an action
#[derive(Debug, Error, PartialEq)]
pub enum ActionConfigError {
    #[error("loop interval must be positive, got {0}")]
    NonPositiveInterval(f64),
    #[error("photo count must be positive")]
    ZeroCount,
}

/// A scheduled photographic action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSpec {
    /// One capture at the trigger time
    SingleShot {
        start: TimeSpec,
        exposure: ExposureSettings,
    },
    /// Repeated captures at a fixed interval until the end time
    BoundedLoop {
        start: TimeSpec,
        end: TimeSpec,
        interval_secs: f64,
        exposure: ExposureSettings,
    },
    /// Exactly `count` captures distributed evenly from start to end,
    /// endpoints included
    CountedInterval {
        start: TimeSpec,
        end: TimeSpec,
        count: u32,
        exposure: ExposureSettings,
    },
}

impl ActionSpec {
    pub fn single_shot(start: TimeSpec, exposure: ExposureSettings) -> Self {
        ActionSpec::SingleShot { start, exposure }
    }

    pub fn bounded_loop(
        start: TimeSpec,
        end: TimeSpec,
        interval_secs: f64,
        exposure: ExposureSettings,
    ) -> Result<Self, ActionConfigError> {
        if interval_secs <= 0.0 {
            return Err(ActionConfigError::NonPositiveInterval(interval_secs));
        }
        Ok(ActionSpec::BoundedLoop {
            start,
            end,
            interval_secs,
            exposure,
        })
    }

    pub fn counted_interval(
        start: TimeSpec,
        end: TimeSpec,
        count: u32,
        exposure: ExposureSettings,
    ) -> Result<Self, ActionConfigError> {
        if count == 0 {
            return Err(ActionConfigError::ZeroCount);
        }
        Ok(ActionSpec::CountedInterval {
            start,
            end,
            count,
            exposure,
        })
    }

    /// Short kind tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ActionSpec::SingleShot { .. } => "photo",
            ActionSpec::BoundedLoop { .. } => "loop",
            ActionSpec::CountedInterval { .. } => "interval",
        }
    }

    pub fn exposure(&self) -> &ExposureSettings {
        match self {
            ActionSpec::SingleShot { exposure, .. }
            | ActionSpec::BoundedLoop { exposure, .. }
            | ActionSpec::CountedInterval { exposure, .. } => exposure,
        }
    }

    pub fn start(&self) -> &TimeSpec {
        match self {
            ActionSpec::SingleShot { start, .. }
            | ActionSpec::BoundedLoop { start, .. }
            | ActionSpec::CountedInterval { start, .. } => start,
        }
    }
}

impl fmt::Display for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSpec::SingleShot { start, exposure } => {
                write!(
                    f,
                    "Photo at {} with {}",
                    start,
                    exposure.to_camera_settings()
                )
            }
            ActionSpec::BoundedLoop {
                start,
                end,
                interval_secs,
                exposure,
            } => write!(
                f,
                "Loop from {} to {} every {}s with {}",
                start,
                end,
                interval_secs,
                exposure.to_camera_settings()
            ),
            ActionSpec::CountedInterval {
                start,
                end,
                count,
                exposure,
            } => write!(
                f,
                "Interval: {} photos from {} to {} with {}",
                count,
                start,
                end,
                exposure.to_camera_settings()
            ),
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
