// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_clock_starts_at_midnight() {
    let clock = FakeClock::new();
    assert_eq!(clock.now(), 0.0);
}

#[test]
fn fake_clock_advance() {
    let clock = FakeClock::at(100.0);
    clock.advance(25.5);
    assert_eq!(clock.now(), 125.5);
}

#[test]
fn fake_clock_set() {
    let clock = FakeClock::new();
    clock.set(43_200.0);
    assert_eq!(clock.now(), 43_200.0);
}

#[test]
fn fake_clock_wraps_past_midnight() {
    let clock = FakeClock::at(86_399.0);
    clock.advance(2.0);
    assert_eq!(clock.now(), 1.0);
}

#[test]
fn fake_clock_clones_share_state() {
    let clock = FakeClock::new();
    let other = clock.clone();
    clock.advance(10.0);
    assert_eq!(other.now(), 10.0);
}

#[tokio::test]
async fn fake_clock_sleep_advances_time() {
    let clock = FakeClock::at(50.0);
    clock.sleep(std::time::Duration::from_millis(250)).await;
    assert_eq!(clock.now(), 50.25);
}

#[test]
fn system_clock_in_day_range() {
    let now = SystemClock.now();
    assert!((0.0..86_400.0).contains(&now));
}
