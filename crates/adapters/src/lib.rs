// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for camera I/O

pub mod camera;

pub use camera::{
    ArtifactId, CameraAdapter, CameraError, CameraId, CameraStatus, Gphoto2Adapter,
};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use camera::{CameraCall, FakeCamera, FakeCameraAdapter};
