// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exposure settings and their gphoto2 string forms
//!
//! Plan lines carry optional ISO / aperture / shutter values; unset fields
//! fall back to the display defaults when settings are pushed to cameras.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ISO: u32 = 1600;
pub const DEFAULT_APERTURE: &str = "f/8";
pub const DEFAULT_SHUTTER: &str = "1/125";

/// Per-action exposure configuration, fields unset where the plan used `-`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureSettings {
    pub iso: Option<u32>,
    /// Aperture f-number, e.g. 8.0 for f/8
    pub aperture: Option<f64>,
    /// Shutter time in seconds, e.g. 0.008 for 1/125
    pub shutter_secs: Option<f64>,
    /// Mirror-lockup settle delay in milliseconds, 0 disables
    #[serde(default)]
    pub mlu_delay_ms: u64,
}

impl ExposureSettings {
    /// Effective camera settings with defaults applied
    pub fn to_camera_settings(&self) -> CameraSettings {
        CameraSettings {
            iso: self.iso.unwrap_or(DEFAULT_ISO),
            aperture: self
                .aperture
                .map(format_aperture)
                .unwrap_or_else(|| DEFAULT_APERTURE.to_string()),
            shutter: self
                .shutter_secs
                .map(format_shutter)
                .unwrap_or_else(|| DEFAULT_SHUTTER.to_string()),
        }
    }
}

/// Concrete settings in gphoto2 string format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub iso: u32,
    /// "f/8", "f/5.6", ...
    pub aperture: String,
    /// "1/125", "2", ...
    pub shutter: String,
}

impl fmt::Display for CameraSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISO {} {} {}", self.iso, self.aperture, self.shutter)
    }
}

/// Format an f-number the way gphoto2 expects it
pub fn format_aperture(f_number: f64) -> String {
    if f_number.fract() == 0.0 {
        format!("f/{}", f_number as i64)
    } else {
        format!("f/{:.1}", f_number)
    }
}

/// Format a shutter time the way gphoto2 expects it
pub fn format_shutter(seconds: f64) -> String {
    if seconds >= 1.0 {
        if seconds.fract() == 0.0 {
            format!("{}", seconds as i64)
        } else {
            format!("{:.1}", seconds)
        }
    } else {
        let fraction = 1.0 / seconds;
        if fraction.fract() == 0.0 {
            format!("1/{}", fraction as i64)
        } else {
            format!("1/{:.0}", fraction)
        }
    }
}

#[cfg(test)]
#[path = "exposure_tests.rs"]
mod tests;
