// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Shapes aggregator output into the label/series/color tuples chart widgets
//! consume. Widgets choke on truly empty datasets, so every degenerate input
//! collapses to a one-element placeholder instead of an empty series.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::BudgetStatus;
use crate::category::color_for;

pub const LIMIT_COLOR: &str = "#3A6B55";
pub const SPENT_COLOR: &str = "#D48380";
const PLACEHOLDER_COLOR: &str = "#EEEEEE";

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub data: Vec<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

/// Pie slices from category totals. Colors are a fixed function of category
/// identity, falling back to a palette cycle keyed by position so ad hoc
/// labels stay stable within a session.
pub fn pie(totals: &[(String, Decimal)]) -> Vec<PieSlice> {
    if totals.iter().all(|(_, v)| v.is_zero()) {
        return vec![PieSlice {
            label: "No data".to_string(),
            value: Decimal::ONE,
            color: PLACEHOLDER_COLOR.to_string(),
        }];
    }
    totals
        .iter()
        .enumerate()
        .map(|(i, (label, value))| PieSlice {
            label: label.clone(),
            value: *value,
            color: color_for(label, i).to_string(),
        })
        .collect()
}

/// Line/bar data from bucketed series. Each entry of `series` pairs a name
/// and color with one value per bucket label.
pub fn line(
    buckets: &[(String, Decimal)],
    series: Vec<(&str, &str, Vec<Decimal>)>,
) -> ChartData {
    if buckets.is_empty() {
        return ChartData {
            labels: vec!["—".to_string()],
            datasets: vec![Series {
                name: "None".to_string(),
                color: PLACEHOLDER_COLOR.to_string(),
                data: vec![Decimal::ZERO],
            }],
        };
    }
    ChartData {
        labels: buckets.iter().map(|(l, _)| l.clone()).collect(),
        datasets: series
            .into_iter()
            .map(|(name, color, data)| Series {
                name: name.to_string(),
                color: color.to_string(),
                data,
            })
            .collect(),
    }
}

/// Single-series convenience over [`line`] using the bucket totals directly.
pub fn line_from_buckets(name: &str, color: &str, buckets: &[(String, Decimal)]) -> ChartData {
    let data = buckets.iter().map(|(_, v)| *v).collect();
    line(buckets, vec![(name, color, data)])
}

/// Paired Limit/Spent datasets per budget row, labels truncated to four
/// characters the way the budget chart renders them.
pub fn budget_comparison(statuses: &[BudgetStatus]) -> ChartData {
    if statuses.is_empty() {
        return ChartData {
            labels: vec!["None".to_string()],
            datasets: vec![
                Series {
                    name: "Limit".to_string(),
                    color: LIMIT_COLOR.to_string(),
                    data: vec![Decimal::ZERO],
                },
                Series {
                    name: "Spent".to_string(),
                    color: SPENT_COLOR.to_string(),
                    data: vec![Decimal::ZERO],
                },
            ],
        };
    }
    ChartData {
        labels: statuses
            .iter()
            .map(|s| s.category.chars().take(4).collect())
            .collect(),
        datasets: vec![
            Series {
                name: "Limit".to_string(),
                color: LIMIT_COLOR.to_string(),
                data: statuses.iter().map(|s| s.limit).collect(),
            },
            Series {
                name: "Spent".to_string(),
                color: SPENT_COLOR.to_string(),
                data: statuses.iter().map(|s| s.spent).collect(),
            },
        ],
    }
}
