// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-of-day arithmetic with 24-hour modular wraparound
//!
//! Eclipse sequences can run through local midnight, so every conversion
//! from raw seconds back to a clock time wraps modulo 86400. Raw offsets
//! are not clock-of-day values and are never bounds-checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Seconds in one 24-hour day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Errors from constructing or parsing a time of day
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid time format '{0}', expected HH:MM:SS")]
    InvalidFormat(String),
    #[error("invalid hour {0}, must be 0-23")]
    HourOutOfRange(u32),
    #[error("invalid minute {0}, must be 0-59")]
    MinuteOutOfRange(u32),
    #[error("invalid second {0}, must be 0-59")]
    SecondOutOfRange(u32),
}

/// A wall-clock time of day, seconds resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time of day, validating field ranges
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(TimeError::SecondOutOfRange(second));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    /// Decompose raw seconds into a clock time, wrapping modulo one day
    ///
    /// Overflow (>= 86400) and underflow (negative) both wrap to a valid
    /// 24-hour time.
    pub fn from_seconds(seconds: i64) -> Self {
        let wrapped = seconds.rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: (wrapped / 3600) as u8,
            minute: ((wrapped % 3600) / 60) as u8,
            second: (wrapped % 60) as u8,
        }
    }

    /// Seconds since midnight, always in [0, 86400)
    pub fn as_seconds(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(TimeError::InvalidFormat(s.to_string()));
        }
        let nums: Vec<u32> = parts
            .iter()
            .map(|p| p.parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| TimeError::InvalidFormat(s.to_string()))?;
        TimeOfDay::new(nums[0], nums[1], nums[2])
    }
}

/// Raw H:M:S to seconds, no bounds enforcement
///
/// Also used on offsets, which may exceed a day or carry components
/// outside clock ranges.
pub fn to_seconds(hour: i64, minute: i64, second: i64) -> i64 {
    hour * 3600 + minute * 60 + second
}

/// Signed duration from `t1` to `t2` in seconds
///
/// A negative naive subtraction treats `t2` as next-day and adds 86400.
/// A result of 0 (identical times) is the non-positive-duration signal
/// the executor treats as a configuration error for loop actions.
pub fn difference(t1: TimeOfDay, t2: TimeOfDay) -> i64 {
    let mut delta = i64::from(t2.as_seconds()) - i64::from(t1.as_seconds());
    if delta < 0 {
        delta += SECONDS_PER_DAY;
    }
    delta
}

/// Human-readable duration for logs, e.g. "1h 23m 45s"
pub fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return format!("-{}", format_duration(-seconds));
    }
    humantime::format_duration(Duration::from_secs(seconds as u64)).to_string()
}

#[cfg(test)]
#[path = "timeofday_tests.rs"]
mod tests;
