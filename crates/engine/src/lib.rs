// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! umbra-engine: scheduling and execution of photographic actions
//!
//! This crate provides:
//! - **CameraFleet**: concurrent per-device fan-out with timeout isolation
//! - **wait_until**: the trigger-time wait loop with skew tolerance
//! - **ActionExecutor**: drives actions in order and accumulates statistics
//! - **preflight**: camera readiness checks before a run

pub mod config;
pub mod error;
pub mod executor;
pub mod fleet;
pub mod preflight;
pub mod wait;

pub use config::ExecutorConfig;
pub use error::EngineError;
pub use executor::{ActionExecutor, ActionOutcome, RunReport};
pub use fleet::{select_cameras, CameraFleet};
pub use preflight::{preflight, PreflightReport};
pub use wait::{wait_until, Cancelled};
