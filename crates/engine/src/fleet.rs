// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-camera fan-out
//!
//! One logical operation (configure, capture, mirror lockup) is issued to
//! every managed camera as its own task, with a per-device timeout. A
//! device that fails or times out only loses its own slot in the result
//! map; the other devices are unaffected.

use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinSet;

use umbra_adapters::{ArtifactId, CameraAdapter, CameraError, CameraId, CameraStatus};
use umbra_core::CameraSettings;

use crate::error::EngineError;

/// The set of cameras one run operates on
#[derive(Clone)]
pub struct CameraFleet<A> {
    adapter: A,
    cameras: Vec<CameraId>,
    device_timeout: Duration,
}

/// Validate a requested camera subset against the detected set
///
/// With no request, all detected cameras are used. Requesting a camera
/// that was not detected is an error; an empty effective set is too.
pub fn select_cameras(
    detected: &[(CameraId, String)],
    requested: Option<&[CameraId]>,
) -> Result<Vec<CameraId>, EngineError> {
    let available: Vec<CameraId> = detected.iter().map(|(id, _)| *id).collect();
    let selected = match requested {
        None => available,
        Some(ids) => {
            let missing: Vec<CameraId> = ids
                .iter()
                .filter(|id| !available.contains(id))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(EngineError::MissingCameras(missing));
            }
            ids.to_vec()
        }
    };
    if selected.is_empty() {
        return Err(EngineError::NoCameras);
    }
    Ok(selected)
}

impl<A: CameraAdapter> CameraFleet<A> {
    pub fn new(adapter: A, cameras: Vec<CameraId>, device_timeout: Duration) -> Self {
        Self {
            adapter,
            cameras,
            device_timeout,
        }
    }

    pub fn cameras(&self) -> &[CameraId] {
        &self.cameras
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Push the same settings to every camera
    ///
    /// Best-effort: per-device failures land as `false` in the result map.
    pub async fn configure_all(&self, settings: &CameraSettings) -> HashMap<CameraId, bool> {
        tracing::info!(%settings, "configuring cameras");

        let results = self
            .fan_out(|adapter, id| {
                let settings = settings.clone();
                async move { adapter.configure(id, &settings).await }
            })
            .await;

        let mut map = HashMap::new();
        for (id, outcome) in results {
            match outcome {
                Some(Ok(())) => {
                    map.insert(id, true);
                }
                Some(Err(e)) => {
                    tracing::warn!(%id, error = %e, "configure failed");
                    map.insert(id, false);
                }
                None => {
                    tracing::warn!(%id, "configure timed out");
                    map.insert(id, false);
                }
            }
        }

        let ok = map.values().filter(|v| **v).count();
        tracing::info!("configuration complete: {}/{} successful", ok, map.len());
        map
    }

    /// Trigger one exposure on every camera simultaneously
    ///
    /// A failed or timed-out device yields `None`; results are never
    /// silently dropped.
    pub async fn capture_all(&self, test_mode: bool) -> HashMap<CameraId, Option<ArtifactId>> {
        tracing::info!(test_mode, "capturing with all cameras");

        let results = self
            .fan_out(|adapter, id| async move { adapter.capture(id, test_mode).await })
            .await;

        let mut map = HashMap::new();
        for (id, outcome) in results {
            match outcome {
                Some(Ok(artifact)) => {
                    tracing::info!(%id, %artifact, "capture ok");
                    map.insert(id, Some(artifact));
                }
                Some(Err(e)) => {
                    tracing::error!(%id, error = %e, "capture failed");
                    map.insert(id, None);
                }
                None => {
                    tracing::error!(%id, "capture timed out");
                    map.insert(id, None);
                }
            }
        }

        let ok = map.values().filter(|v| v.is_some()).count();
        tracing::info!("capture complete: {}/{} successful", ok, map.len());
        map
    }

    /// Engage mirror lockup on every camera
    pub async fn mirror_lockup_all(&self, delay_ms: u64) -> HashMap<CameraId, bool> {
        let results = self
            .fan_out(|adapter, id| async move { adapter.mirror_lockup(id, true, delay_ms).await })
            .await;

        let mut map = HashMap::new();
        for (id, outcome) in results {
            let ok = matches!(outcome, Some(Ok(())));
            if !ok {
                tracing::warn!(%id, "mirror lockup failed");
            }
            map.insert(id, ok);
        }
        map
    }

    /// Query status of every camera; an unreachable camera reports as
    /// disconnected
    pub async fn status_all(&self) -> HashMap<CameraId, CameraStatus> {
        let results = self
            .fan_out(|adapter, id| async move { adapter.status(id).await })
            .await;

        let mut map = HashMap::new();
        for (id, outcome) in results {
            let status = match outcome {
                Some(Ok(status)) => status,
                Some(Err(e)) => {
                    tracing::warn!(%id, error = %e, "status query failed");
                    CameraStatus::default()
                }
                None => {
                    tracing::warn!(%id, "status query timed out");
                    CameraStatus::default()
                }
            };
            map.insert(id, status);
        }
        map
    }

    /// Run one operation against every camera concurrently
    ///
    /// Returns `None` for a device that exceeded the per-device timeout.
    async fn fan_out<F, Fut, T>(&self, op: F) -> Vec<(CameraId, Option<Result<T, CameraError>>)>
    where
        F: Fn(A, CameraId) -> Fut,
        Fut: std::future::Future<Output = Result<T, CameraError>> + Send + 'static,
        T: Send + 'static,
    {
        let mut set = JoinSet::new();
        for &id in &self.cameras {
            let future = op(self.adapter.clone(), id);
            let timeout = self.device_timeout;
            set.spawn(async move {
                let outcome = tokio::time::timeout(timeout, future).await.ok();
                (id, outcome)
            });
        }

        let mut results = Vec::with_capacity(self.cameras.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(entry) => results.push(entry),
                Err(e) => tracing::error!(error = %e, "camera task aborted"),
            }
        }
        results
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
