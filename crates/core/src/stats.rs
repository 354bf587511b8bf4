// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution statistics
//!
//! Owned exclusively by the executor; single-writer, so no locking. Read
//! by the caller after a run and reset only explicitly.

use serde::Serialize;
use std::fmt;

/// Counters accumulated over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
    /// Actions that completed successfully
    pub actions_executed: u64,
    /// Per-device successful captures
    pub photos_taken: u64,
    /// Actions that failed
    pub execution_errors: u64,
}

impl ExecutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_action(&mut self) {
        self.actions_executed += 1;
    }

    pub fn record_photos(&mut self, count: u64) {
        self.photos_taken += count;
    }

    pub fn record_error(&mut self) {
        self.execution_errors += 1;
    }

    /// Reset all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ExecutionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} actions executed, {} photos taken, {} errors",
            self.actions_executed, self.photos_taken, self.execution_errors
        )
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
