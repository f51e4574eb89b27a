// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{aggregate, AggregateSnapshot};
use crate::api::Store;
use crate::bucket::{bucket, BucketMode};
use crate::fetch::{fetch_all, FinancialData};
use crate::utils::{fmt_money, maybe_print_json, pretty_table, progress_bar};
use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let watch = m.get_one::<u64>("watch").copied();
    loop {
        render(store, m)?;
        match watch {
            // Stand-in for the realtime change feed: the notification carries
            // no payload we use, so a periodic full re-fetch is equivalent.
            Some(secs) => std::thread::sleep(std::time::Duration::from_secs(secs.max(1))),
            None => break,
        }
    }
    Ok(())
}

fn render(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let data = fetch_all(store);
    let snap = aggregate(&data.income, &data.expenses, &data.budgets, Utc::now());

    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &snap)? {
        return Ok(());
    }

    print_overview(&snap);
    print_budgets(&snap);
    print_week(&data);
    print_recent(&data);
    Ok(())
}

fn print_overview(snap: &AggregateSnapshot) {
    let rows = vec![
        vec!["Total Income".to_string(), fmt_money(&snap.total_income)],
        vec!["Total Expenses".to_string(), fmt_money(&snap.total_expenses)],
        vec!["Balance".to_string(), fmt_money(&snap.balance)],
        vec![
            "Savings Rate".to_string(),
            format!("{:.1}%", snap.savings_rate),
        ],
    ];
    println!("{}", pretty_table(&["Overview", "Amount"], rows));
}

fn print_budgets(snap: &AggregateSnapshot) {
    if snap.budget_status.is_empty() {
        println!("No budgets set. Try 'pesowise budget set <category> <amount>'.");
        return;
    }
    let rows = snap
        .budget_status
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.spent),
                fmt_money(&s.limit),
                format!("{} {:.0}%", progress_bar(s.percentage), s.percentage),
                if s.over_budget { "OVER".into() } else { "OK".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Budget", "Spent (month)", "Limit", "Used", "Status"], rows)
    );
}

fn print_week(data: &FinancialData) {
    let records: Vec<_> = data.expenses.iter().map(|t| (t.amount, t.date)).collect();
    let week = bucket(&records, BucketMode::Weekly, Utc::now());
    let total: Decimal = week.iter().map(|(_, v)| *v).sum();
    let rows = week
        .iter()
        .map(|(day, amt)| vec![day.clone(), fmt_money(amt)])
        .collect();
    println!("{}", pretty_table(&["This Week", "Spent"], rows));
    println!(
        "Week total {} · daily average {}",
        fmt_money(&total),
        fmt_money(&(total / Decimal::from(7)))
    );
}

fn print_recent(data: &FinancialData) {
    let mut rows = Vec::new();
    for t in data.income.iter().take(3) {
        rows.push(vec![
            t.date.format("%Y-%m-%d").to_string(),
            t.title.clone(),
            t.category.clone(),
            format!("+{}", fmt_money(&t.amount)),
        ]);
    }
    for t in data.expenses.iter().take(3) {
        rows.push(vec![
            t.date.format("%Y-%m-%d").to_string(),
            t.title.clone(),
            t.category.clone(),
            format!("-{}", fmt_money(&t.amount)),
        ]);
    }
    if rows.is_empty() {
        println!("No recent activity.");
    } else {
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Category", "Amount"], rows)
        );
    }
}
