// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn new_validates_ranges() {
    assert!(TimeOfDay::new(23, 59, 59).is_ok());
    assert_eq!(TimeOfDay::new(24, 0, 0), Err(TimeError::HourOutOfRange(24)));
    assert_eq!(
        TimeOfDay::new(0, 60, 0),
        Err(TimeError::MinuteOutOfRange(60))
    );
    assert_eq!(
        TimeOfDay::new(0, 0, 60),
        Err(TimeError::SecondOutOfRange(60))
    );
}

#[test]
fn from_seconds_wraps_overflow() {
    // 25:00:00 wraps to 01:00:00
    let t = TimeOfDay::from_seconds(25 * 3600);
    assert_eq!(t, TimeOfDay::new(1, 0, 0).unwrap());
}

#[test]
fn from_seconds_wraps_underflow() {
    // -1s wraps to 23:59:59
    let t = TimeOfDay::from_seconds(-1);
    assert_eq!(t, TimeOfDay::new(23, 59, 59).unwrap());
}

#[test]
fn from_seconds_wraps_multiple_days() {
    let t = TimeOfDay::from_seconds(3 * SECONDS_PER_DAY + 61);
    assert_eq!(t, TimeOfDay::new(0, 1, 1).unwrap());

    let t = TimeOfDay::from_seconds(-2 * SECONDS_PER_DAY - 61);
    assert_eq!(t, TimeOfDay::new(23, 58, 59).unwrap());
}

#[test]
fn to_seconds_is_unbounded() {
    assert_eq!(to_seconds(25, 0, 0), 90_000);
    assert_eq!(to_seconds(-1, 0, 0), -3600);
}

#[test]
fn difference_same_day() {
    let t1 = TimeOfDay::new(14, 0, 0).unwrap();
    let t2 = TimeOfDay::new(15, 30, 0).unwrap();
    assert_eq!(difference(t1, t2), 5400);
}

#[test]
fn difference_crosses_midnight() {
    let t1 = TimeOfDay::new(23, 50, 0).unwrap();
    let t2 = TimeOfDay::new(0, 10, 0).unwrap();
    assert_eq!(difference(t1, t2), 1200);
}

#[test]
fn difference_identical_times_is_zero() {
    let t = TimeOfDay::new(12, 0, 0).unwrap();
    assert_eq!(difference(t, t), 0);
}

#[test]
fn parse_and_display_round_trip() {
    let t: TimeOfDay = "16:03:43".parse().unwrap();
    assert_eq!(t, TimeOfDay::new(16, 3, 43).unwrap());
    assert_eq!(t.to_string(), "16:03:43");
}

#[test]
fn parse_rejects_malformed_input() {
    assert!(matches!(
        "16:03".parse::<TimeOfDay>(),
        Err(TimeError::InvalidFormat(_))
    ));
    assert!(matches!(
        "aa:bb:cc".parse::<TimeOfDay>(),
        Err(TimeError::InvalidFormat(_))
    ));
    assert_eq!(
        "24:00:00".parse::<TimeOfDay>(),
        Err(TimeError::HourOutOfRange(24))
    );
}

#[test]
fn format_duration_human_readable() {
    assert_eq!(format_duration(5025), "1h 23m 45s");
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(-90), "-1m 30s");
}

proptest! {
    // Round-trip law: decomposing the second count of any valid clock time
    // yields the same clock time.
    #[test]
    fn seconds_round_trip(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let t = TimeOfDay::new(h, m, s).unwrap();
        prop_assert_eq!(TimeOfDay::from_seconds(i64::from(t.as_seconds())), t);
    }

    #[test]
    fn from_seconds_always_in_range(secs in -10 * SECONDS_PER_DAY..10 * SECONDS_PER_DAY) {
        let t = TimeOfDay::from_seconds(secs);
        prop_assert!(i64::from(t.as_seconds()) < SECONDS_PER_DAY);
    }

    #[test]
    fn difference_is_non_negative(a in 0i64..SECONDS_PER_DAY, b in 0i64..SECONDS_PER_DAY) {
        let t1 = TimeOfDay::from_seconds(a);
        let t2 = TimeOfDay::from_seconds(b);
        let d = difference(t1, t2);
        prop_assert!((0..SECONDS_PER_DAY).contains(&d));
    }
}
