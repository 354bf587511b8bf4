// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-reference resolution: symbolic reference + offset -> absolute time
//!
//! A trigger time is expressed as a contact reference with a signed offset
//! ("Max - 00:00:10"), or as an absolute time of day. Resolution is pure;
//! unknown references and invalid operators are unrepresentable here
//! because they are rejected when the plan is parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::contacts::{Contact, ContactTable};
use crate::timeofday::{TimeOfDay, SECONDS_PER_DAY};

/// Errors from parsing a time reference or operator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("unknown time reference: {0}")]
    Unknown(String),
    #[error("invalid operator: {0}, must be '+' or '-'")]
    InvalidOperator(String),
}

/// Sign operator applied to an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Plus => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
        }
    }
}

impl FromStr for Operator {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Plus),
            "-" => Ok(Operator::Minus),
            _ => Err(ReferenceError::InvalidOperator(s.to_string())),
        }
    }
}

/// What a trigger time is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeReference {
    /// Offset interpreted directly as a time of day
    Absolute,
    /// Offset applied to a contact instant
    Contact(Contact),
}

impl TimeReference {
    /// Parse a reference field; `-` is the absolute marker
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        if s == "-" {
            return Ok(TimeReference::Absolute);
        }
        Ok(TimeReference::Contact(s.parse()?))
    }
}

/// A reference-relative (or absolute) trigger time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpec {
    pub reference: TimeReference,
    pub operator: Operator,
    /// Raw offset in seconds; not a clock-of-day value, may exceed a day
    pub offset_secs: i64,
}

impl TimeSpec {
    pub fn absolute(time: TimeOfDay) -> Self {
        Self {
            reference: TimeReference::Absolute,
            operator: Operator::Plus,
            offset_secs: i64::from(time.as_seconds()),
        }
    }

    pub fn relative(contact: Contact, operator: Operator, offset_secs: i64) -> Self {
        Self {
            reference: TimeReference::Contact(contact),
            operator,
            offset_secs,
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reference {
            TimeReference::Absolute => write!(f, "{}", TimeOfDay::from_seconds(self.offset_secs)),
            TimeReference::Contact(c) => write!(
                f,
                "{} {} {}",
                c,
                self.operator,
                TimeOfDay::from_seconds(self.offset_secs)
            ),
        }
    }
}

/// Resolve a time spec against the contact table
///
/// The two operator branches correct wraparound asymmetrically: `+` relies
/// on the final modulo for overflow, `-` pre-adds one day on underflow
/// before that modulo. Both reduce to the same modular result; the order
/// is kept to match reference behavior bit-for-bit and is pinned down by
/// the property tests.
pub fn resolve(spec: &TimeSpec, table: &ContactTable) -> TimeOfDay {
    match spec.reference {
        TimeReference::Absolute => TimeOfDay::from_seconds(spec.offset_secs),
        TimeReference::Contact(contact) => {
            let base = i64::from(table.get(contact).as_seconds());
            let raw = match spec.operator {
                Operator::Plus => base + spec.offset_secs,
                Operator::Minus => {
                    let mut result = base - spec.offset_secs;
                    if result < 0 {
                        result += SECONDS_PER_DAY;
                    }
                    result
                }
            };
            TimeOfDay::from_seconds(raw)
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
