// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::api::Store;
use crate::bucket::{bucket, BucketMode};
use crate::category::{normalize, EXPENSE_CATEGORIES};
use crate::chart;
use crate::fetch::fetch_all;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        Some(("budgets", sub)) => budgets(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    let snap = aggregate(&data.income, &data.expenses, &data.budgets, Utc::now());
    if maybe_print_json(json_flag, jsonl_flag, &snap)? {
        return Ok(());
    }
    let done = data.goals.iter().filter(|g| g.is_completed()).count();
    let rows = vec![
        vec!["Total Income".into(), fmt_money(&snap.total_income)],
        vec!["Total Expenses".into(), fmt_money(&snap.total_expenses)],
        vec!["Net Balance".into(), fmt_money(&snap.balance)],
        vec!["Savings Rate".into(), format!("{:.1}%", snap.savings_rate)],
        vec![
            "Transactions".into(),
            (snap.income_count + snap.expense_count).to_string(),
        ],
        vec!["Budgets Set".into(), snap.budget_status.len().to_string()],
        vec![
            "Goals".into(),
            format!("{}/{} completed", done, data.goals.len()),
        ],
    ];
    println!("{}", pretty_table(&["KPI", "Value"], rows));
    Ok(())
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    let now = Utc::now();
    let inc: Vec<_> = data.income.iter().map(|t| (t.amount, t.date)).collect();
    let exp: Vec<_> = data.expenses.iter().map(|t| (t.amount, t.date)).collect();
    let inc_buckets = bucket(&inc, BucketMode::Monthly, now);
    let exp_buckets = bucket(&exp, BucketMode::Monthly, now);

    let chart_data = chart::line(
        &inc_buckets,
        vec![
            (
                "Income",
                chart::LIMIT_COLOR,
                inc_buckets.iter().map(|(_, v)| *v).collect(),
            ),
            (
                "Expenses",
                chart::SPENT_COLOR,
                exp_buckets.iter().map(|(_, v)| *v).collect(),
            ),
        ],
    );
    if maybe_print_json(json_flag, jsonl_flag, &chart_data)? {
        return Ok(());
    }
    let rows = inc_buckets
        .iter()
        .zip(&exp_buckets)
        .map(|((label, inc_total), (_, exp_total))| {
            vec![
                label.clone(),
                fmt_money(inc_total),
                fmt_money(exp_total),
                fmt_money(&(inc_total - exp_total)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
    );
    Ok(())
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);

    // All-time spend per canonical category, pre-seeded so every category
    // shows up in the breakdown.
    let mut totals: Vec<(String, Decimal)> = EXPENSE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), Decimal::ZERO))
        .collect();
    for e in &data.expenses {
        let cat = normalize(&e.category, &EXPENSE_CATEGORIES);
        if let Some(entry) = totals.iter_mut().find(|(name, _)| name == cat) {
            entry.1 += e.amount;
        }
    }
    let slices = chart::pie(&totals);
    if maybe_print_json(json_flag, jsonl_flag, &slices)? {
        return Ok(());
    }

    let grand: Decimal = totals.iter().map(|(_, v)| *v).sum();
    let rows = slices
        .iter()
        .map(|s| {
            let share = if grand > Decimal::ZERO {
                s.value / grand * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            vec![
                s.label.clone(),
                fmt_money(&s.value),
                format!("{:.1}%", share),
                s.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], rows)
    );
    Ok(())
}

fn budgets(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    let snap = aggregate(&data.income, &data.expenses, &data.budgets, Utc::now());

    if json_flag || jsonl_flag {
        let chart_data = chart::budget_comparison(&snap.budget_status);
        maybe_print_json(json_flag, jsonl_flag, &chart_data)?;
        return Ok(());
    }
    let over = snap.budget_status.iter().filter(|s| s.over_budget).count();
    let on_track = snap.budget_status.len() - over;
    let rows = snap
        .budget_status
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.spent),
                fmt_money(&s.limit),
                format!("{:.0}%", s.percentage),
                if s.over_budget { "over".into() } else { "on track".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent (month)", "Limit", "Used", "Status"], rows)
    );
    println!("{} on track · {} over budget", on_track, over);
    Ok(())
}
