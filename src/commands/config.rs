// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(sub)?,
        Some(("show", _)) => show()?,
        Some(("path", _)) => println!("{}", config::config_path()?.display()),
        _ => {}
    }
    Ok(())
}

fn set(sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = config::load()?;
    if let Some(url) = sub.get_one::<String>("service-url") {
        cfg.service_url = url.trim_end_matches('/').to_string();
    }
    if let Some(key) = sub.get_one::<String>("api-key") {
        cfg.api_key = key.clone();
    }
    if let Some(user) = sub.get_one::<String>("user-id") {
        cfg.user_id = user.clone();
    }
    config::save(&cfg)?;
    println!("Config updated at {}", config::config_path()?.display());
    Ok(())
}

fn show() -> Result<()> {
    let cfg = config::load()?;
    let mask = |s: &str| {
        if s.is_empty() {
            "(unset)".to_string()
        } else {
            format!("{}…", s.chars().take(8).collect::<String>())
        }
    };
    let rows = vec![
        vec!["service_url".to_string(), if cfg.service_url.is_empty() { "(unset)".into() } else { cfg.service_url.clone() }],
        vec!["api_key".to_string(), mask(&cfg.api_key)],
        vec!["user_id".to_string(), if cfg.user_id.is_empty() { "(unset)".into() } else { cfg.user_id.clone() }],
    ];
    println!("{}", pretty_table(&["Key", "Value"], rows));
    Ok(())
}
