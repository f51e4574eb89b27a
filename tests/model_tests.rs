// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Timelike};
use pesowise::models::{Budget, Goal, Transaction};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn transaction_parses_numeric_and_string_amounts() {
    let a = Transaction::from_row(&json!({
        "id": "t1", "title": "Lunch", "amount": 120.5,
        "category": "Food", "date": "2025-08-05T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(a.amount, Decimal::new(1205, 1));

    let b = Transaction::from_row(&json!({
        "id": "t2", "title": "Lunch", "amount": "88.25",
        "category": "Food", "date": "2025-08-05T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(b.amount, Decimal::new(8825, 2));
}

#[test]
fn garbage_amount_coerces_to_zero() {
    let t = Transaction::from_row(&json!({
        "id": "t3", "title": "x", "amount": "not-a-number",
        "category": "Etc.", "date": "2025-08-05T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(t.amount, Decimal::ZERO);
}

#[test]
fn transaction_without_id_or_date_is_dropped() {
    assert!(Transaction::from_row(&json!({
        "title": "no id", "amount": 5, "category": "Food",
        "date": "2025-08-05T10:00:00Z",
    }))
    .is_none());
    assert!(Transaction::from_row(&json!({
        "id": "t4", "title": "bad date", "amount": 5,
        "category": "Food", "date": "yesterday-ish",
    }))
    .is_none());
}

#[test]
fn date_only_strings_become_midnight_utc() {
    let t = Transaction::from_row(&json!({
        "id": "t5", "title": "x", "amount": 1,
        "category": "Food", "date": "2025-08-05",
    }))
    .unwrap();
    assert_eq!(t.date.year(), 2025);
    assert_eq!(t.date.month(), 8);
    assert_eq!(t.date.day(), 5);
    assert_eq!(t.date.hour(), 0);
}

#[test]
fn missing_optional_fields_default() {
    let t = Transaction::from_row(&json!({
        "id": "t6", "amount": 10, "date": "2025-08-05T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(t.title, "");
    assert_eq!(t.category, "");
}

#[test]
fn numeric_ids_are_stringified() {
    let t = Transaction::from_row(&json!({
        "id": 42, "title": "x", "amount": 1,
        "category": "Food", "date": "2025-08-05T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(t.id, "42");
}

#[test]
fn budget_defaults_period_and_parses_end_date() {
    let b = Budget::from_row(&json!({
        "id": "b1", "category": "Food", "amount": "1000",
    }))
    .unwrap();
    assert_eq!(b.period, "monthly");
    assert!(b.end_date.is_none());

    let b = Budget::from_row(&json!({
        "id": "b2", "category": "Bills", "amount": 500,
        "period": "monthly", "end_date": "2025-12-31",
    }))
    .unwrap();
    assert_eq!(b.end_date.map(|d| d.to_string()), Some("2025-12-31".into()));

    assert!(Budget::from_row(&json!({ "category": "Food", "amount": 1 })).is_none());
}

#[test]
fn goal_progress_clamps_into_percent_range() {
    let g = Goal::from_row(&json!({
        "id": "g1", "title": "Trip", "progress_ratio": 140,
        "category": "Etc.",
    }))
    .unwrap();
    assert_eq!(g.progress_ratio, 100);
    assert!(g.is_completed());

    let g = Goal::from_row(&json!({
        "id": "g2", "title": "Trip", "progress_ratio": -5,
        "category": "Etc.",
    }))
    .unwrap();
    assert_eq!(g.progress_ratio, 0);
    assert!(!g.is_completed());
}
