// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::Store;
use crate::fetch::fetch_all;
use crate::utils::{maybe_print_json, parse_date, pretty_table, progress_bar};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("progress", sub)) => progress(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let pct = sub.get_one::<i64>("progress").copied().unwrap_or(0).clamp(0, 100);
    let deadline = sub
        .get_one::<String>("deadline")
        .map(|s| parse_date(s))
        .transpose()?;
    let category = sub.get_one::<String>("category").unwrap();
    store.insert(
        "goals",
        serde_json::json!({
            "user_id": store.user(),
            "title": title,
            "progress_ratio": pct,
            "deadline": deadline.map(|d| d.to_string()),
            "category": category,
            "is_completed": pct >= 100,
        }),
    )?;
    println!("Goal '{}' created at {}%", title, pct);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = fetch_all(store);
    if maybe_print_json(json_flag, jsonl_flag, &data.goals)? {
        return Ok(());
    }
    let rows = data
        .goals
        .iter()
        .map(|g| {
            vec![
                g.id.clone(),
                g.title.clone(),
                format!("{} {}%", progress_bar(Decimal::from(g.progress_ratio)), g.progress_ratio),
                g.deadline.map(|d| d.to_string()).unwrap_or_default(),
                g.category.clone(),
                if g.is_completed() { "done".into() } else { "active".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Title", "Progress", "Deadline", "Category", "Status"],
            rows
        )
    );
    Ok(())
}

fn progress(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let pct = sub.get_one::<i64>("percent").copied().unwrap_or(0).clamp(0, 100);
    store.update(
        "goals",
        id,
        serde_json::json!({
            "progress_ratio": pct,
            "is_completed": pct >= 100,
        }),
    )?;
    println!("Goal {} now at {}%{}", id, pct, if pct >= 100 { " — completed 🎉" } else { "" });
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete("goals", id)?;
    println!("Deleted goal {}", id);
    Ok(())
}
