// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use thiserror::Error;
use umbra_adapters::CameraId;
use umbra_core::TimeOfDay;

/// Errors that can occur while preparing or driving a run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("duration from {start} to {end} is not positive")]
    NonPositiveDuration { start: TimeOfDay, end: TimeOfDay },
    #[error("no cameras available")]
    NoCameras,
    #[error("requested cameras not detected: {0:?}")]
    MissingCameras(Vec<CameraId>),
}
