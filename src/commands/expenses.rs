// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{aggregate, check_expense, ExpenseCheck};
use crate::api::Store;
use crate::category::{normalize, EXPENSE_CATEGORIES};
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
        &EXPENSE_CATEGORIES,
    );
    let force = sub.get_flag("force");

    // Both pre-checks run against the ledger as of this fetch. They are
    // advisory: concurrent writers from other sessions can still race them.
    let data = fetch_all(store);
    let snap = aggregate(&data.income, &data.expenses, &data.budgets, Utc::now());
    match check_expense(category, amount, &snap, force) {
        ExpenseCheck::InsufficientBalance { balance } => {
            anyhow::bail!(
                "insufficient balance: {} available, {} requested; no write was issued",
                fmt_money(&balance),
                fmt_money(&amount)
            );
        }
        ExpenseCheck::OverBudget {
            category,
            limit,
            spent,
        } => {
            println!("Monthly limit reached for {}!", category);
            println!(
                "  Limit {} · already spent {} · remaining {}",
                fmt_money(&limit),
                fmt_money(&spent),
                fmt_money(&(limit - spent))
            );
            println!("Re-run with --force to record it anyway. Nothing was written.");
            return Ok(());
        }
        ExpenseCheck::Ok => {}
    }

    store.insert(
        "expenses",
        serde_json::json!({
            "user_id": store.user(),
            "title": title,
            "amount": decimal_to_json(&amount),
            "category": category,
            "date": Utc::now().to_rfc3339(),
        }),
    )?;
    println!("Recorded {} expense '{}' ({})", fmt_money(&amount), title, category);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    let today = Utc::now().date_naive();

    let mut rows: Vec<&Transaction> = data
        .expenses
        .iter()
        .filter(|t| !sub.get_flag("today") || t.date.date_naive() == today)
        .collect();
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

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete("expenses", id)?;
    println!("Deleted expense {}", id);
    Ok(())
}
