// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::api::Store;
use crate::fetch::fetch_all;
use crate::utils::{
    decimal_to_json, fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table,
    progress_bar,
};
use anyhow::Result;
use chrono::Utc;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("status", sub)) => status(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let end_date = sub
        .get_one::<String>("end-date")
        .map(|s| parse_date(s))
        .transpose()?;

    // The store does not enforce one budget per category; updating the first
    // case-insensitive match keeps lookups unambiguous.
    let data = fetch_all(store);
    let existing = data
        .budgets
        .iter()
        .find(|b| b.category.eq_ignore_ascii_case(category));

    let payload = serde_json::json!({
        "user_id": store.user(),
        "category": category,
        "amount": decimal_to_json(&amount),
        "period": "monthly",
        "end_date": end_date.map(|d| d.to_string()),
    });
    match existing {
        Some(b) => {
            store.update("budgets", &b.id, payload)?;
            println!("Budget updated: {} = {}", category, fmt_money(&amount));
        }
        None => {
            store.insert("budgets", payload)?;
            println!("Budget set: {} = {} per month", category, fmt_money(&amount));
        }
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    if maybe_print_json(json_flag, jsonl_flag, &data.budgets)? {
        return Ok(());
    }
    let rows = data
        .budgets
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.category.clone(),
                fmt_money(&b.amount),
                b.period.clone(),
                b.end_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Category", "Limit", "Period", "End date"], rows)
    );
    Ok(())
}

fn status(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    let snap = aggregate(&data.income, &data.expenses, &data.budgets, Utc::now());
    if maybe_print_json(json_flag, jsonl_flag, &snap.budget_status)? {
        return Ok(());
    }
    if snap.budget_status.is_empty() {
        println!("No budgets set.");
        return Ok(());
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
        pretty_table(&["Category", "Spent (month)", "Limit", "Used", "Status"], rows)
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete("budgets", id)?;
    println!("Deleted budget {}", id);
    Ok(())
}
