// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Camera adapter trait and shared types
//!
//! The engine never talks to camera hardware directly; it drives this
//! trait. One call maps to one device so the engine can fan out to many
//! devices concurrently with per-device failure isolation.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use umbra_core::CameraSettings;

mod gphoto2;

pub use gphoto2::Gphoto2Adapter;

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{CameraCall, FakeCamera, FakeCameraAdapter};

/// Unique identifier for a managed camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub u32);

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CameraId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of one captured image, e.g. the on-camera file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(pub String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Readiness information for one camera
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraStatus {
    pub connected: bool,
    /// Battery charge percentage, if the camera reports it
    pub battery_percent: Option<u8>,
    /// Free card space in megabytes, if the camera reports it
    pub free_space_mb: Option<u64>,
}

/// Errors from camera operations
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera {0} not connected")]
    NotConnected(CameraId),
    #[error("configure failed on camera {id}: {message}")]
    ConfigureFailed { id: CameraId, message: String },
    #[error("capture failed on camera {id}: {message}")]
    CaptureFailed { id: CameraId, message: String },
    #[error("command failed: {0}")]
    CommandFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for camera control
///
/// Implementations manage the device connection lifecycle themselves;
/// callers only see these entry points.
#[async_trait]
pub trait CameraAdapter: Clone + Send + Sync + 'static {
    /// Detect attached cameras, returning ids and human-readable names
    async fn detect(&self) -> Result<Vec<(CameraId, String)>, CameraError>;

    /// Push exposure settings to one camera
    async fn configure(&self, id: CameraId, settings: &CameraSettings) -> Result<(), CameraError>;

    /// Trigger one exposure; in test mode the capture is simulated but an
    /// artifact id is still produced
    async fn capture(&self, id: CameraId, test_mode: bool) -> Result<ArtifactId, CameraError>;

    /// Enable or disable mirror lockup with the given settle delay
    async fn mirror_lockup(
        &self,
        id: CameraId,
        enabled: bool,
        delay_ms: u64,
    ) -> Result<(), CameraError>;

    /// Query readiness information for one camera
    async fn status(&self, id: CameraId) -> Result<CameraStatus, CameraError>;
}
