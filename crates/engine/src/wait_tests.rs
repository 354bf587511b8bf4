// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use umbra_core::FakeClock;

fn target(h: u32, m: u32, s: u32) -> TimeOfDay {
    TimeOfDay::new(h, m, s).unwrap()
}

#[test]
fn classify_future_target_waits() {
    assert_eq!(
        classify(100.0, 160.0),
        WaitStep::Wait { remaining: 60.0 }
    );
}

#[test]
fn classify_exact_hit_is_reached() {
    assert_eq!(classify(160.0, 160.0), WaitStep::Reached { delta: 0.0 });
}

#[test]
fn classify_within_skew_tolerance_is_reached() {
    assert_eq!(classify(185.0, 160.0), WaitStep::Reached { delta: -25.0 });
    assert_eq!(classify(190.0, 160.0), WaitStep::Reached { delta: -30.0 });
}

#[test]
fn classify_missed_target_proceeds() {
    // 31s late: beyond skew tolerance, well under half a day
    assert_eq!(
        classify(191.0, 160.0),
        WaitStep::ProceedLate { late_by: 31.0 }
    );
    // 11h59m late still proceeds
    let late = 160.0 + 43_199.0;
    assert_eq!(
        classify(late, 160.0),
        WaitStep::ProceedLate { late_by: 43_199.0 }
    );
}

#[test]
fn classify_half_day_late_means_tomorrow() {
    // Exactly 12h late: target reinterpreted as tomorrow
    let now = 160.0 + 43_200.0;
    assert_eq!(
        classify(now, 160.0),
        WaitStep::Wait { remaining: 43_200.0 }
    );
}

#[tokio::test]
async fn waits_until_target_reached() {
    let clock = FakeClock::at(100.0);
    let (_tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    // Target 10s ahead; the fake clock advances 0.25s per poll
    wait_until(&clock, &mut rx, TimeOfDay::from_seconds(110), &config)
        .await
        .unwrap();

    let now = clock.now();
    assert!(now >= 110.0, "clock only reached {}", now);
    assert!(now < 111.0, "overshot to {}", now);
}

#[tokio::test]
async fn late_target_returns_immediately() {
    let clock = FakeClock::at(1000.0);
    let (_tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    // Target 100s in the past: proceed without advancing the clock
    wait_until(&clock, &mut rx, TimeOfDay::from_seconds(900), &config)
        .await
        .unwrap();
    assert_eq!(clock.now(), 1000.0);
}

#[tokio::test]
async fn slightly_late_target_counts_as_reached() {
    let clock = FakeClock::at(905.0);
    let (_tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    wait_until(&clock, &mut rx, TimeOfDay::from_seconds(900), &config)
        .await
        .unwrap();
    assert_eq!(clock.now(), 905.0);
}

#[tokio::test]
async fn shutdown_interrupts_wait() {
    let clock = FakeClock::at(0.0);
    let (tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    tx.send(true).ok();
    let result = wait_until(&clock, &mut rx, target(12, 0, 0), &config).await;
    assert_eq!(result, Err(Cancelled));
}

#[tokio::test]
async fn wait_crosses_midnight() {
    // 23:59:50 waiting for 00:00:20 is a 30s wait, not a day-long one
    let clock = FakeClock::at(86_390.0);
    let (_tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    wait_until(&clock, &mut rx, target(0, 0, 20), &config)
        .await
        .unwrap();
    assert!(clock.now() >= 20.0 && clock.now() < 30.0);
}

#[tokio::test]
async fn target_twelve_hours_late_is_treated_as_tomorrow() {
    // Now 13:00:00, target 00:30:00: 12.5h late, so wait for tomorrow's
    // 00:30:00 rather than proceeding immediately.
    let clock = FakeClock::at(13.0 * 3600.0);
    let (_tx, mut rx) = tokio::sync::watch::channel(false);
    let config = ExecutorConfig::default();

    wait_until(&clock, &mut rx, target(0, 30, 0), &config)
        .await
        .unwrap();

    // The fake clock wrapped past midnight and reached 00:30:00
    assert!(clock.now() >= 1800.0 && clock.now() < 1831.0);
}

#[tokio::test]
async fn classify_is_not_fooled_midway() {
    // Wait crossing midnight: while still before midnight the remaining
    // time stays positive via the next-day reinterpretation only when
    // more than 12h late; a plain future target never grows.
    let clock = FakeClock::at(86_000.0);
    let step = classify(clock.now(), 86_100.0);
    assert_eq!(step, WaitStep::Wait { remaining: 100.0 });
}
