// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::contacts::Contact;
use crate::resolver::{Operator, TimeSpec};
use crate::timeofday::TimeOfDay;

fn tod(h: u32, m: u32, s: u32) -> TimeOfDay {
    TimeOfDay::new(h, m, s).unwrap()
}

#[test]
fn loop_rejects_non_positive_interval() {
    let start = TimeSpec::relative(Contact::C2, Operator::Plus, 0);
    let end = TimeSpec::relative(Contact::C3, Operator::Minus, 0);
    let err = ActionSpec::bounded_loop(start, end, 0.0, ExposureSettings::default());
    assert_eq!(err, Err(ActionConfigError::NonPositiveInterval(0.0)));

    let err = ActionSpec::bounded_loop(start, end, -2.0, ExposureSettings::default());
    assert_eq!(err, Err(ActionConfigError::NonPositiveInterval(-2.0)));
}

#[test]
fn interval_rejects_zero_count() {
    let start = TimeSpec::relative(Contact::C2, Operator::Plus, 0);
    let end = TimeSpec::relative(Contact::C3, Operator::Minus, 0);
    let err = ActionSpec::counted_interval(start, end, 0, ExposureSettings::default());
    assert_eq!(err, Err(ActionConfigError::ZeroCount));
}

#[test]
fn valid_actions_construct() {
    let start = TimeSpec::relative(Contact::C2, Operator::Plus, 5);
    let end = TimeSpec::relative(Contact::C3, Operator::Minus, 5);
    assert!(ActionSpec::bounded_loop(start, end, 3.0, ExposureSettings::default()).is_ok());
    assert!(ActionSpec::counted_interval(start, end, 10, ExposureSettings::default()).is_ok());
}

#[test]
fn single_shot_description() {
    let action = ActionSpec::single_shot(
        TimeSpec::relative(Contact::Max, Operator::Minus, 10),
        ExposureSettings::default(),
    );
    assert_eq!(
        action.to_string(),
        "Photo at Max - 00:00:10 with ISO 1600 f/8 1/125"
    );
}

#[test]
fn absolute_single_shot_description() {
    let action = ActionSpec::single_shot(
        TimeSpec::absolute(tod(9, 30, 0)),
        ExposureSettings {
            iso: Some(100),
            aperture: Some(11.0),
            shutter_secs: Some(0.002),
            mlu_delay_ms: 0,
        },
    );
    assert_eq!(
        action.to_string(),
        "Photo at 09:30:00 with ISO 100 f/11 1/500"
    );
}

#[test]
fn loop_description() {
    let action = ActionSpec::bounded_loop(
        TimeSpec::relative(Contact::C1, Operator::Plus, 60),
        TimeSpec::relative(Contact::C2, Operator::Minus, 60),
        30.0,
        ExposureSettings::default(),
    )
    .unwrap();
    assert_eq!(
        action.to_string(),
        "Loop from C1 + 00:01:00 to C2 - 00:01:00 every 30s with ISO 1600 f/8 1/125"
    );
}

#[test]
fn interval_description() {
    let action = ActionSpec::counted_interval(
        TimeSpec::relative(Contact::C2, Operator::Plus, 0),
        TimeSpec::relative(Contact::C3, Operator::Minus, 0),
        10,
        ExposureSettings::default(),
    )
    .unwrap();
    assert_eq!(
        action.to_string(),
        "Interval: 10 photos from C2 + 00:00:00 to C3 - 00:00:00 with ISO 1600 f/8 1/125"
    );
}

#[test]
fn kind_tags() {
    let start = TimeSpec::absolute(tod(10, 0, 0));
    let end = TimeSpec::relative(Contact::C4, Operator::Plus, 0);
    assert_eq!(
        ActionSpec::single_shot(start, ExposureSettings::default()).kind(),
        "photo"
    );
    assert_eq!(
        ActionSpec::bounded_loop(start, end, 1.0, ExposureSettings::default())
            .unwrap()
            .kind(),
        "loop"
    );
    assert_eq!(
        ActionSpec::counted_interval(start, end, 2, ExposureSettings::default())
            .unwrap()
            .kind(),
        "interval"
    );
}
