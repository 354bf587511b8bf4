// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eclipse contact table: the five astronomical instants C1..C4
//!
//! Loaded once at startup and immutable for the process lifetime. The
//! chronological-order invariant is validated, not enforced: out-of-order
//! contacts are reported as warnings, while a non-positive totality
//! duration is a hard failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::resolver::ReferenceError;
use crate::timeofday::{format_duration, TimeOfDay};

/// Longest totality physically possible, about 7m32s. Anything above is
/// almost certainly a data-entry mistake.
const MAX_TOTALITY_SECS: i64 = 7 * 60 + 32;

/// One of the five named eclipse contact instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact {
    C1,
    C2,
    Max,
    C3,
    C4,
}

impl Contact {
    /// All contacts in chronological order
    pub const ALL: [Contact; 5] = [
        Contact::C1,
        Contact::C2,
        Contact::Max,
        Contact::C3,
        Contact::C4,
    ];
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::C1 => write!(f, "C1"),
            Contact::C2 => write!(f, "C2"),
            Contact::Max => write!(f, "Max"),
            Contact::C3 => write!(f, "C3"),
            Contact::C4 => write!(f, "C4"),
        }
    }
}

impl FromStr for Contact {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C1" => Ok(Contact::C1),
            "C2" => Ok(Contact::C2),
            "Max" => Ok(Contact::Max),
            "C3" => Ok(Contact::C3),
            "C4" => Ok(Contact::C4),
            _ => Err(ReferenceError::Unknown(s.to_string())),
        }
    }
}

/// Errors from contact table validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactTableError {
    #[error("totality duration is not positive")]
    NonPositiveTotality,
}

/// The five contact times for one eclipse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTable {
    pub c1: TimeOfDay,
    pub c2: TimeOfDay,
    pub max: TimeOfDay,
    pub c3: TimeOfDay,
    pub c4: TimeOfDay,
}

impl ContactTable {
    pub fn new(c1: TimeOfDay, c2: TimeOfDay, max: TimeOfDay, c3: TimeOfDay, c4: TimeOfDay) -> Self {
        Self { c1, c2, max, c3, c4 }
    }

    /// Look up a contact's time of day
    pub fn get(&self, contact: Contact) -> TimeOfDay {
        match contact {
            Contact::C1 => self.c1,
            Contact::C2 => self.c2,
            Contact::Max => self.max,
            Contact::C3 => self.c3,
            Contact::C4 => self.c4,
        }
    }

    /// Totality duration in seconds: C3 minus C2, naive subtraction
    pub fn totality_secs(&self) -> i64 {
        i64::from(self.c3.as_seconds()) - i64::from(self.c2.as_seconds())
    }

    /// Validate the timing sequence
    ///
    /// Returns warnings for out-of-order contacts and an implausibly long
    /// totality. A totality duration <= 0 is the only hard failure.
    pub fn validate(&self) -> Result<Vec<String>, ContactTableError> {
        let mut warnings = Vec::new();

        for pair in Contact::ALL.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.get(a).as_seconds() >= self.get(b).as_seconds() {
                warnings.push(format!("contact times not in order: {} >= {}", a, b));
            }
        }

        let totality = self.totality_secs();
        if totality <= 0 {
            return Err(ContactTableError::NonPositiveTotality);
        }
        if totality > MAX_TOTALITY_SECS {
            warnings.push(format!(
                "totality duration seems very long: {}",
                format_duration(totality)
            ));
        }

        Ok(warnings)
    }
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
