// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake camera adapter for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{ArtifactId, CameraAdapter, CameraError, CameraId, CameraStatus};
use umbra_core::CameraSettings;

/// Recorded camera call
#[derive(Debug, Clone)]
pub enum CameraCall {
    Detect,
    Configure {
        id: CameraId,
        settings: CameraSettings,
    },
    Capture {
        id: CameraId,
        test_mode: bool,
    },
    MirrorLockup {
        id: CameraId,
        enabled: bool,
        delay_ms: u64,
    },
    Status {
        id: CameraId,
    },
}

/// Fake camera state
#[derive(Debug, Clone)]
pub struct FakeCamera {
    pub name: String,
    pub status: CameraStatus,
    /// When set, configure calls fail with this message
    pub configure_error: Option<String>,
    /// When set, capture calls fail with this message
    pub capture_error: Option<String>,
    pub captures: u64,
}

impl FakeCamera {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CameraStatus {
                connected: true,
                battery_percent: Some(100),
                free_space_mb: Some(32_000),
            },
            configure_error: None,
            capture_error: None,
            captures: 0,
        }
    }
}

/// Fake camera adapter for testing
#[derive(Clone, Default)]
pub struct FakeCameraAdapter {
    cameras: Arc<Mutex<HashMap<CameraId, FakeCamera>>>,
    calls: Arc<Mutex<Vec<CameraCall>>>,
}

impl FakeCameraAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake fleet of `count` cameras with ids 0..count
    pub fn with_cameras(count: u32) -> Self {
        let adapter = Self::new();
        for id in 0..count {
            adapter.add_camera(CameraId(id), format!("Fake Camera {}", id));
        }
        adapter
    }

    pub fn add_camera(&self, id: CameraId, name: impl Into<String>) {
        self.cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, FakeCamera::new(name));
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CameraCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of capture calls recorded for one camera
    pub fn capture_count(&self, id: CameraId) -> u64 {
        self.cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .map(|c| c.captures)
            .unwrap_or(0)
    }

    /// Make configure fail for one camera
    pub fn fail_configure(&self, id: CameraId, message: impl Into<String>) {
        if let Some(camera) = self
            .cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&id)
        {
            camera.configure_error = Some(message.into());
        }
    }

    /// Make capture fail for one camera
    pub fn fail_capture(&self, id: CameraId, message: impl Into<String>) {
        if let Some(camera) = self
            .cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&id)
        {
            camera.capture_error = Some(message.into());
        }
    }

    /// Override one camera's reported status
    pub fn set_status(&self, id: CameraId, status: CameraStatus) {
        if let Some(camera) = self
            .cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&id)
        {
            camera.status = status;
        }
    }

    fn record(&self, call: CameraCall) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }
}

#[async_trait]
impl CameraAdapter for FakeCameraAdapter {
    async fn detect(&self) -> Result<Vec<(CameraId, String)>, CameraError> {
        self.record(CameraCall::Detect);
        let mut detected: Vec<(CameraId, String)> = self
            .cameras
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(id, camera)| (*id, camera.name.clone()))
            .collect();
        detected.sort_by_key(|(id, _)| *id);
        Ok(detected)
    }

    async fn configure(&self, id: CameraId, settings: &CameraSettings) -> Result<(), CameraError> {
        self.record(CameraCall::Configure {
            id,
            settings: settings.clone(),
        });
        let cameras = self.cameras.lock().unwrap_or_else(|e| e.into_inner());
        let camera = cameras.get(&id).ok_or(CameraError::NotConnected(id))?;
        match &camera.configure_error {
            Some(message) => Err(CameraError::ConfigureFailed {
                id,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn capture(&self, id: CameraId, test_mode: bool) -> Result<ArtifactId, CameraError> {
        self.record(CameraCall::Capture { id, test_mode });
        let mut cameras = self.cameras.lock().unwrap_or_else(|e| e.into_inner());
        let camera = cameras.get_mut(&id).ok_or(CameraError::NotConnected(id))?;
        if let Some(message) = &camera.capture_error {
            return Err(CameraError::CaptureFailed {
                id,
                message: message.clone(),
            });
        }
        camera.captures += 1;
        Ok(ArtifactId::new(format!(
            "fake-{}-{}",
            id,
            uuid::Uuid::new_v4()
        )))
    }

    async fn mirror_lockup(
        &self,
        id: CameraId,
        enabled: bool,
        delay_ms: u64,
    ) -> Result<(), CameraError> {
        self.record(CameraCall::MirrorLockup {
            id,
            enabled,
            delay_ms,
        });
        let cameras = self.cameras.lock().unwrap_or_else(|e| e.into_inner());
        if !cameras.contains_key(&id) {
            return Err(CameraError::NotConnected(id));
        }
        Ok(())
    }

    async fn status(&self, id: CameraId) -> Result<CameraStatus, CameraError> {
        self.record(CameraCall::Status { id });
        let cameras = self.cameras.lock().unwrap_or_else(|e| e.into_inner());
        let camera = cameras.get(&id).ok_or(CameraError::NotConnected(id))?;
        Ok(camera.status.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
