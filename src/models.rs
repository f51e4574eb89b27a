// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed snapshots of the rows the hosted store hands back. Rows arrive as
//! untyped JSON maps; parsing happens once at the fetch boundary and fails
//! closed: a row without a usable id or date is dropped (and logged) rather
//! than letting a half-formed record leak into aggregation.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::utils::{json_date, json_datetime, json_decimal, json_string};

/// One income or expense row. Amounts are non-negative by convention; the
/// table a row came from decides its sign in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn from_row(row: &Value) -> Option<Self> {
        let id = match json_string(&row["id"]) {
            Some(id) => id,
            None => {
                warn!("dropping transaction row without id");
                return None;
            }
        };
        let date = match json_datetime(&row["date"]) {
            Some(d) => d,
            None => {
                warn!(id = %id, "dropping transaction row with unparseable date");
                return None;
            }
        };
        Some(Transaction {
            id,
            title: json_string(&row["title"]).unwrap_or_default(),
            amount: json_decimal(&row["amount"]),
            category: json_string(&row["category"]).unwrap_or_default(),
            date,
        })
    }
}

/// A monthly spending limit for one category. Only the "monthly" period is
/// in use; the category string is stored as the user typed it and is matched
/// case-insensitively at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    pub period: String,
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    pub fn from_row(row: &Value) -> Option<Self> {
        let id = match json_string(&row["id"]) {
            Some(id) => id,
            None => {
                warn!("dropping budget row without id");
                return None;
            }
        };
        Some(Budget {
            id,
            category: json_string(&row["category"]).unwrap_or_default(),
            amount: json_decimal(&row["amount"]),
            period: json_string(&row["period"]).unwrap_or_else(|| "monthly".to_string()),
            end_date: json_date(&row["end_date"]),
        })
    }
}

/// A savings goal. Progress is user-entered, not derived from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub progress_ratio: i64,
    pub deadline: Option<NaiveDate>,
    pub category: String,
}

impl Goal {
    pub fn from_row(row: &Value) -> Option<Self> {
        let id = match json_string(&row["id"]) {
            Some(id) => id,
            None => {
                warn!("dropping goal row without id");
                return None;
            }
        };
        let progress = row["progress_ratio"].as_i64().unwrap_or(0).clamp(0, 100);
        Some(Goal {
            id,
            title: json_string(&row["title"]).unwrap_or_default(),
            progress_ratio: progress,
            deadline: json_date(&row["deadline"]),
            category: json_string(&row["category"]).unwrap_or_default(),
        })
    }

    pub fn is_completed(&self) -> bool {
        self.progress_ratio >= 100
    }
}
