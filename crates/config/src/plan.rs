// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed plan structures

use serde::{Deserialize, Serialize};

use umbra_core::{ActionSpec, ContactTable};

/// Camera verification settings from the `Verif` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationConfig {
    pub check_battery: bool,
    pub check_storage: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            check_battery: true,
            check_storage: true,
        }
    }
}

/// A complete parsed eclipse plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub contacts: ContactTable,
    pub verification: Option<VerificationConfig>,
    pub actions: Vec<ActionSpec>,
    pub test_mode: bool,
}
