// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gphoto2-based camera adapter
//!
//! Shells out to the `gphoto2` CLI, one invocation per operation. Detected
//! cameras are remembered by their USB port so later calls can address a
//! specific body.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::process::Command;

use super::{ArtifactId, CameraAdapter, CameraError, CameraId, CameraStatus};
use umbra_core::CameraSettings;

/// Camera adapter driving the gphoto2 command-line tool
#[derive(Clone, Default)]
pub struct Gphoto2Adapter {
    /// Port addresses by camera id, filled in by `detect`
    ports: Arc<Mutex<HashMap<CameraId, String>>>,
}

impl Gphoto2Adapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn port_for(&self, id: CameraId) -> Result<String, CameraError> {
        self.ports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or(CameraError::NotConnected(id))
    }

    async fn run_gphoto2(&self, args: &[&str]) -> Result<String, CameraError> {
        let output = Command::new("gphoto2").args(args).output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CameraError::CommandFailed(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl CameraAdapter for Gphoto2Adapter {
    async fn detect(&self) -> Result<Vec<(CameraId, String)>, CameraError> {
        let stdout = self.run_gphoto2(&["--auto-detect"]).await?;

        // Output is a header followed by "<model>   usb:XXX,YYY" rows
        let mut detected = Vec::new();
        let mut ports = self.ports.lock().unwrap_or_else(|e| e.into_inner());
        ports.clear();

        for (index, line) in stdout
            .lines()
            .filter(|l| l.contains("usb:"))
            .enumerate()
        {
            let Some(pos) = line.rfind("usb:") else {
                continue;
            };
            let name = line[..pos].trim().to_string();
            let port = line[pos..].trim().to_string();
            let id = CameraId(index as u32);

            tracing::info!(%id, %name, %port, "detected camera");
            ports.insert(id, port);
            detected.push((id, name));
        }

        Ok(detected)
    }

    async fn configure(&self, id: CameraId, settings: &CameraSettings) -> Result<(), CameraError> {
        let port = self.port_for(id)?;
        let iso = format!("iso={}", settings.iso);
        let aperture = format!("aperture={}", settings.aperture);
        let shutter = format!("shutterspeed={}", settings.shutter);

        self.run_gphoto2(&[
            "--port",
            &port,
            "--set-config",
            &iso,
            "--set-config",
            &aperture,
            "--set-config",
            &shutter,
        ])
        .await
        .map_err(|e| CameraError::ConfigureFailed {
            id,
            message: e.to_string(),
        })?;

        Ok(())
    }

    async fn capture(&self, id: CameraId, test_mode: bool) -> Result<ArtifactId, CameraError> {
        let port = self.port_for(id)?;

        if test_mode {
            let artifact = ArtifactId::new(format!("test-{}-{}", id, uuid::Uuid::new_v4()));
            tracing::info!(%id, %artifact, "simulated capture");
            return Ok(artifact);
        }

        let stdout = self
            .run_gphoto2(&["--port", &port, "--capture-image", "--keep"])
            .await
            .map_err(|e| CameraError::CaptureFailed {
                id,
                message: e.to_string(),
            })?;

        // gphoto2 reports "New file is in location /store_.../IMG_xxxx.CR2"
        let artifact = stdout
            .lines()
            .find_map(|l| l.strip_prefix("New file is in location "))
            .map(|path| ArtifactId::new(path.trim()))
            .unwrap_or_else(|| ArtifactId::new(format!("capture-{}-{}", id, uuid::Uuid::new_v4())));

        Ok(artifact)
    }

    async fn mirror_lockup(
        &self,
        id: CameraId,
        enabled: bool,
        _delay_ms: u64,
    ) -> Result<(), CameraError> {
        let port = self.port_for(id)?;
        let value = format!("mirrorlockup={}", u8::from(enabled));

        self.run_gphoto2(&["--port", &port, "--set-config", &value])
            .await
            .map_err(|e| CameraError::ConfigureFailed {
                id,
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn status(&self, id: CameraId) -> Result<CameraStatus, CameraError> {
        let port = match self.port_for(id) {
            Ok(port) => port,
            Err(_) => return Ok(CameraStatus::default()),
        };

        let stdout = self
            .run_gphoto2(&["--port", &port, "--summary"])
            .await?;

        // Battery and storage lines are model-dependent; parse what we can
        let battery_percent = stdout.lines().find_map(|l| {
            let l = l.trim();
            l.strip_prefix("Battery Level:")
                .and_then(|v| v.trim().trim_end_matches('%').parse::<u8>().ok())
        });
        let free_space_mb = stdout.lines().find_map(|l| {
            let l = l.trim();
            l.strip_prefix("Free Space:")
                .and_then(|v| v.trim().trim_end_matches(" MB").parse::<u64>().ok())
        });

        Ok(CameraStatus {
            connected: true,
            battery_percent,
            free_space_mb,
        })
    }
}
