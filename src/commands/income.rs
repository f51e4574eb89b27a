// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::Store;
use crate::bucket::{bucket, BucketMode};
use crate::category::{normalize, INCOME_CATEGORIES};
use crate::fetch::fetch_all;
use crate::models::Transaction;
use crate::utils::{decimal_to_json, fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Utc;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = normalize(
        sub.get_one::<String>("category").unwrap(),
        &INCOME_CATEGORIES,
    );
    store.insert(
        "income",
        serde_json::json!({
            "user_id": store.user(),
            "title": title,
            "amount": decimal_to_json(&amount),
            "category": category,
            "date": Utc::now().to_rfc3339(),
        }),
    )?;
    println!("Recorded {} income '{}' ({})", fmt_money(&amount), title, category);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);

    if let Some(trend) = sub.get_one::<String>("trend") {
        let mode = match trend.as_str() {
            "weekly" => BucketMode::RollingWeek,
            "yearly" => BucketMode::Yearly,
            _ => BucketMode::Monthly,
        };
        return print_trend(&data.income, &data.expenses, mode, json_flag, jsonl_flag);
    }

    let mut rows: Vec<&Transaction> = data.income.iter().collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }
    let table = rows
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.date.format("%Y-%m-%d").to_string(),
                t.title.clone(),
                t.category.clone(),
                fmt_money(&t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Title", "Category", "Amount"], table)
    );
    Ok(())
}

fn print_trend(
    income: &[Transaction],
    expenses: &[Transaction],
    mode: BucketMode,
    json_flag: bool,
    jsonl_flag: bool,
) -> Result<()> {
    let now = Utc::now();
    let inc: Vec<_> = income.iter().map(|t| (t.amount, t.date)).collect();
    let exp: Vec<_> = expenses.iter().map(|t| (t.amount, t.date)).collect();
    let inc_buckets = bucket(&inc, mode, now);
    let exp_buckets = bucket(&exp, mode, now);

    let rows: Vec<Vec<String>> = inc_buckets
        .iter()
        .zip(&exp_buckets)
        .map(|((label, inc_total), (_, exp_total))| {
            vec![label.clone(), fmt_money(inc_total), fmt_money(exp_total)]
        })
        .collect();
    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(&["Period", "Income", "Expenses"], rows)
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete("income", id)?;
    println!("Deleted income {}", id);
    Ok(())
}
