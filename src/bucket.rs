// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Time-bucketing of dated amounts into the fixed-length series the chart
//! views expect. Every mode returns its full label set even when no record
//! lands in any bucket; out-of-window records are dropped silently.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const ROLLING_WEEK_LABELS: [&str; 7] = ["6d", "5d", "4d", "3d", "2d", "1d", "Today"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketMode {
    /// The 7 days of the current calendar week, Monday first. Only records
    /// between Monday 00:00:00 and `now` count.
    Weekly,
    /// The last 7 days relative to `now`; slot 6 is today, slot 0 six days
    /// ago.
    RollingWeek,
    /// Jan..Dec of the current calendar year.
    Monthly,
    /// The 5 years ending with the current one, ascending.
    Yearly,
}

/// Sum `records` into the fixed buckets of `mode`. `now` anchors all the
/// windows so callers (and tests) control what "current" means.
pub fn bucket(
    records: &[(Decimal, DateTime<Utc>)],
    mode: BucketMode,
    now: DateTime<Utc>,
) -> Vec<(String, Decimal)> {
    match mode {
        BucketMode::Weekly => current_week(records, now),
        BucketMode::RollingWeek => rolling_week(records, now),
        BucketMode::Monthly => by_month(records, now),
        BucketMode::Yearly => by_year(records, now),
    }
}

fn current_week(
    records: &[(Decimal, DateTime<Utc>)],
    now: DateTime<Utc>,
) -> Vec<(String, Decimal)> {
    let today = now.date_naive();
    let monday = today - chrono::Duration::days(today.weekday().num_days_from_monday() as i64);
    let week_start = monday.and_time(chrono::NaiveTime::MIN).and_utc();

    let mut totals = [Decimal::ZERO; 7];
    for (amount, date) in records {
        if *date >= week_start && *date <= now {
            let idx = date.weekday().num_days_from_monday() as usize;
            totals[idx] += amount;
        }
    }
    labelled(&WEEKDAY_LABELS, &totals)
}

fn rolling_week(
    records: &[(Decimal, DateTime<Utc>)],
    now: DateTime<Utc>,
) -> Vec<(String, Decimal)> {
    let mut totals = [Decimal::ZERO; 7];
    for (amount, date) in records {
        if *date > now {
            continue;
        }
        let diff = (now - *date).num_seconds() / 86_400;
        if (0..7).contains(&diff) {
            totals[6 - diff as usize] += amount;
        }
    }
    labelled(&ROLLING_WEEK_LABELS, &totals)
}

fn by_month(records: &[(Decimal, DateTime<Utc>)], now: DateTime<Utc>) -> Vec<(String, Decimal)> {
    let mut totals = [Decimal::ZERO; 12];
    for (amount, date) in records {
        if date.year() == now.year() {
            totals[date.month0() as usize] += amount;
        }
    }
    labelled(&MONTH_LABELS, &totals)
}

fn by_year(records: &[(Decimal, DateTime<Utc>)], now: DateTime<Utc>) -> Vec<(String, Decimal)> {
    let first_year = now.year() - 4;
    let mut totals = [Decimal::ZERO; 5];
    for (amount, date) in records {
        let offset = date.year() - first_year;
        if (0..5).contains(&offset) {
            totals[offset as usize] += amount;
        }
    }
    (0..5)
        .map(|i| ((first_year + i as i32).to_string(), totals[i]))
        .collect()
}

fn labelled(labels: &[&str], totals: &[Decimal]) -> Vec<(String, Decimal)> {
    labels
        .iter()
        .zip(totals)
        .map(|(l, t)| (l.to_string(), *t))
        .collect()
}
