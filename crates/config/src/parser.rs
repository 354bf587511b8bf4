// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plan file parsing
//!
//! Lines are comma-separated fields; `#` starts a comment and blank lines
//! are skipped. `-` marks an unset optional field. The first field routes
//! the line: `Config`, `Verif`, or an action kind (`Photo`, `Boucle`,
//! `Interval`).

use std::fmt;
use std::path::Path;
use thiserror::Error;

use umbra_core::{
    ActionSpec, ContactTable, ExposureSettings, Operator, TimeOfDay, TimeReference, TimeSpec,
};

use crate::plan::{SystemConfig, VerificationConfig};

/// Errors from loading a plan file
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("missing Config line with eclipse contact times")]
    MissingContacts,
    #[error("no photographic actions defined")]
    NoActions,
}

fn syntax(line: usize, message: impl fmt::Display) -> PlanError {
    PlanError::Syntax {
        line,
        message: message.to_string(),
    }
}

/// Load and parse a plan file from disk
pub fn load_plan(path: &Path) -> Result<SystemConfig, PlanError> {
    let content = std::fs::read_to_string(path)?;
    parse_plan(&content)
}

/// Parse plan text into a system configuration
pub fn parse_plan(input: &str) -> Result<SystemConfig, PlanError> {
    let mut contacts = None;
    let mut verification = None;
    let mut actions = Vec::new();
    let mut test_mode = false;

    for (index, raw_line) in input.lines().enumerate() {
        let line_num = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_line(line);
        let Some(&kind) = fields.first() else {
            continue;
        };

        match kind {
            "Config" => {
                let (table, test) = parse_contacts(&fields, line_num)?;
                contacts = Some(table);
                test_mode = test;
            }
            "Verif" => {
                verification = Some(VerificationConfig::default());
            }
            "Photo" | "Boucle" | "Interval" => {
                actions.push(parse_action(&fields, line_num)?);
            }
            other => {
                tracing::warn!(line = line_num, kind = other, "unknown plan line, skipping");
            }
        }
    }

    let contacts = contacts.ok_or(PlanError::MissingContacts)?;
    if actions.is_empty() {
        return Err(PlanError::NoActions);
    }

    Ok(SystemConfig {
        contacts,
        verification,
        actions,
        test_mode,
    })
}

/// Split on commas, trim, drop empty fields
fn split_line(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Parse a `Config` line:
/// `Config,C1,C2,Max,C3,C4,test_mode`
fn parse_contacts(fields: &[&str], line_num: usize) -> Result<(ContactTable, bool), PlanError> {
    if fields.len() < 7 {
        return Err(syntax(
            line_num,
            format!("Config line requires 7 fields, got {}", fields.len()),
        ));
    }

    let time = |field: &str| -> Result<TimeOfDay, PlanError> {
        field.parse().map_err(|e| syntax(line_num, e))
    };

    let table = ContactTable::new(
        time(fields[1])?,
        time(fields[2])?,
        time(fields[3])?,
        time(fields[4])?,
        time(fields[5])?,
    );
    let test_mode = fields[6] == "1";

    // Ordering problems are reported here, hard validation happens when
    // the table is checked before the run
    for warning in table.validate().unwrap_or_default() {
        tracing::warn!(line = line_num, %warning, "contact table");
    }

    Ok((table, test_mode))
}

/// Parse an action line:
/// `Photo,ref,op,start,-,-,-,-,-,aperture,iso,shutter,mlu`
/// `Boucle,ref,op,start,op,end,interval,-,-,aperture,iso,shutter,mlu`
/// `Interval,ref,op,start,op,end,count,-,-,aperture,iso,shutter,mlu`
fn parse_action(fields: &[&str], line_num: usize) -> Result<ActionSpec, PlanError> {
    if fields.len() < 13 {
        return Err(syntax(
            line_num,
            format!(
                "{} line requires at least 13 fields, got {}",
                fields[0],
                fields.len()
            ),
        ));
    }

    let kind = fields[0];
    let reference = TimeReference::parse(fields[1]).map_err(|e| syntax(line_num, e))?;
    let start_op: Operator = fields[2].parse().map_err(|e| syntax(line_num, e))?;
    let start_time: TimeOfDay = fields[3].parse().map_err(|e| syntax(line_num, e))?;

    let start = TimeSpec {
        reference,
        operator: start_op,
        offset_secs: i64::from(start_time.as_seconds()),
    };

    let exposure = ExposureSettings {
        aperture: parse_opt_f64(fields[9], line_num, "aperture")?,
        iso: parse_opt_u32(fields[10], line_num, "iso")?,
        shutter_secs: parse_opt_f64(fields[11], line_num, "shutter")?,
        mlu_delay_ms: parse_opt_u64(fields[12], line_num, "mlu delay")?.unwrap_or(0),
    };

    if kind == "Photo" {
        return Ok(ActionSpec::single_shot(start, exposure));
    }

    // Boucle / Interval carry a symmetric end and a third numeric field
    let end_op: Operator = fields[4].parse().map_err(|e| syntax(line_num, e))?;
    let end_time: TimeOfDay = fields[5].parse().map_err(|e| syntax(line_num, e))?;
    let end = TimeSpec {
        reference,
        operator: end_op,
        offset_secs: i64::from(end_time.as_seconds()),
    };

    let third = parse_opt_f64(fields[6], line_num, "interval or count")?.ok_or_else(|| {
        syntax(
            line_num,
            format!("{} requires an interval or photo count", kind),
        )
    })?;

    let action = if kind == "Boucle" {
        ActionSpec::bounded_loop(start, end, third, exposure)
    } else {
        ActionSpec::counted_interval(start, end, third as u32, exposure)
    };
    action.map_err(|e| syntax(line_num, e))
}

fn parse_opt_f64(field: &str, line_num: usize, what: &str) -> Result<Option<f64>, PlanError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| syntax(line_num, format!("invalid {}: '{}'", what, field)))
}

fn parse_opt_u32(field: &str, line_num: usize, what: &str) -> Result<Option<u32>, PlanError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| syntax(line_num, format!("invalid {}: '{}'", what, field)))
}

fn parse_opt_u64(field: &str, line_num: usize, what: &str) -> Result<Option<u64>, PlanError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| syntax(line_num, format!("invalid {}: '{}'", what, field)))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
