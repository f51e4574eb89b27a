// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::Store;
use crate::config;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let mut rows = Vec::new();

    // 1) Config completeness
    let cfg = config::load()?;
    if cfg.service_url.is_empty() {
        rows.push(vec!["missing_config".into(), "service_url".into()]);
    }
    if cfg.api_key.is_empty() {
        rows.push(vec!["missing_config".into(), "api_key".into()]);
    }
    if cfg.user_id.is_empty() {
        rows.push(vec!["missing_config".into(), "user_id".into()]);
    }

    // 2) Store reachability, only worth probing with a complete config
    if rows.is_empty() {
        match Store::from_config(&cfg) {
            Ok(store) => {
                if let Err(e) = store.ping() {
                    rows.push(vec!["store_unreachable".into(), e.to_string()]);
                }
            }
            Err(e) => rows.push(vec!["client_build_failed".into(), e.to_string()]),
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
