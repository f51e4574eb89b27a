// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, TimeZone, Utc};
use pesowise::bucket::{bucket, BucketMode, MONTH_LABELS, WEEKDAY_LABELS};
use rust_decimal::Decimal;

fn ts(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

// Wednesday, 2025-08-20 12:00 UTC. The current week runs Mon 2025-08-18
// through Sun 2025-08-24.
fn now() -> DateTime<Utc> {
    ts(2025, 8, 20, 12)
}

#[test]
fn empty_input_yields_full_length_zero_series() {
    for mode in [
        BucketMode::Weekly,
        BucketMode::RollingWeek,
        BucketMode::Monthly,
        BucketMode::Yearly,
    ] {
        let out = bucket(&[], mode, now());
        let expected = match mode {
            BucketMode::Monthly => 12,
            BucketMode::Yearly => 5,
            _ => 7,
        };
        assert_eq!(out.len(), expected);
        assert!(out.iter().all(|(_, v)| v.is_zero()));
    }
}

#[test]
fn weekly_buckets_monday_first() {
    let records = vec![
        (dec(100), ts(2025, 8, 18, 8)),  // Monday of this week
        (dec(50), ts(2025, 8, 20, 10)),  // Wednesday, before now
        (dec(25), ts(2025, 8, 20, 11)),  // Wednesday again, sums
        (dec(999), ts(2025, 8, 17, 9)),  // Sunday of last week: out
        (dec(999), ts(2025, 8, 21, 9)),  // Thursday, after now: out
    ];
    let out = bucket(&records, BucketMode::Weekly, now());
    let labels: Vec<&str> = out.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, WEEKDAY_LABELS.to_vec());
    assert_eq!(out[0].1, dec(100));
    assert_eq!(out[2].1, dec(75));
    assert!(out[3].1.is_zero());
    assert!(out[6].1.is_zero());
}

#[test]
fn weekly_sunday_lands_in_last_slot() {
    // now is Sunday evening so the whole week is in window
    let sunday_now = ts(2025, 8, 24, 20);
    let records = vec![(dec(40), ts(2025, 8, 24, 10))];
    let out = bucket(&records, BucketMode::Weekly, sunday_now);
    assert_eq!(out[6], ("Sun".to_string(), dec(40)));
}

#[test]
fn rolling_week_slots_by_day_distance() {
    let records = vec![
        (dec(10), now()),               // diff 0 -> Today
        (dec(20), ts(2025, 8, 19, 12)), // exactly 1 day -> 1d
        (dec(30), ts(2025, 8, 14, 11)), // 6 days 1h -> 6d
        (dec(999), ts(2025, 8, 13, 11)), // 7 days 1h: out
        (dec(999), ts(2025, 8, 21, 12)), // future: out
    ];
    let out = bucket(&records, BucketMode::RollingWeek, now());
    assert_eq!(out[6], ("Today".to_string(), dec(10)));
    assert_eq!(out[5], ("1d".to_string(), dec(20)));
    assert_eq!(out[0], ("6d".to_string(), dec(30)));
    let total: Decimal = out.iter().map(|(_, v)| *v).sum();
    assert_eq!(total, dec(60));
}

#[test]
fn monthly_always_returns_twelve_calendar_buckets() {
    let records = vec![
        (dec(500), ts(2025, 1, 15, 0)),
        (dec(250), ts(2025, 8, 3, 0)),
        (dec(999), ts(2024, 8, 3, 0)), // previous year: out
    ];
    let out = bucket(&records, BucketMode::Monthly, now());
    assert_eq!(out.len(), 12);
    let labels: Vec<&str> = out.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, MONTH_LABELS.to_vec());
    assert_eq!(out[0].1, dec(500));
    assert_eq!(out[7].1, dec(250));
    assert!(out[11].1.is_zero());
}

#[test]
fn yearly_covers_five_ascending_years() {
    let records = vec![
        (dec(1), ts(2021, 6, 1, 0)),
        (dec(2), ts(2025, 6, 1, 0)),
        (dec(999), ts(2020, 6, 1, 0)), // out of window
        (dec(999), ts(2026, 6, 1, 0)), // out of window
    ];
    let out = bucket(&records, BucketMode::Yearly, now());
    let labels: Vec<&str> = out.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["2021", "2022", "2023", "2024", "2025"]);
    assert_eq!(out[0].1, dec(1));
    assert_eq!(out[4].1, dec(2));
    assert!(out[1].1.is_zero());
}
