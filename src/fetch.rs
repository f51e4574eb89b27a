// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fan-out/fan-in fetch of the four per-user collections. The reads have no
//! ordering dependency and run on scoped threads; the aggregator is only
//! invoked once all have settled. A failed read degrades its collection to
//! empty so one bad sub-query never blanks the whole screen.

use serde_json::Value;
use tracing::warn;

use crate::api::{Store, StoreError};
use crate::models::{Budget, Goal, Transaction};

#[derive(Debug, Clone, Default)]
pub struct FinancialData {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
}

/// One full refresh cycle: fetch all collections concurrently, then parse
/// rows into typed entities, dropping anything malformed. A change
/// notification from the store carries no payload we rely on; re-running
/// this function is the only update path.
pub fn fetch_all(store: &Store) -> FinancialData {
    let (income, expenses, budgets, goals) = std::thread::scope(|s| {
        let inc = s.spawn(|| store.select("income", &[], Some("date.desc")));
        let exp = s.spawn(|| store.select("expenses", &[], Some("date.desc")));
        let bud = s.spawn(|| store.select("budgets", &[], Some("created_at.desc")));
        let goa = s.spawn(|| store.select("goals", &[], Some("created_at.desc")));
        (
            settle("income", inc.join()),
            settle("expenses", exp.join()),
            settle("budgets", bud.join()),
            settle("goals", goa.join()),
        )
    });

    FinancialData {
        income: income.iter().filter_map(Transaction::from_row).collect(),
        expenses: expenses.iter().filter_map(Transaction::from_row).collect(),
        budgets: budgets.iter().filter_map(Budget::from_row).collect(),
        goals: goals.iter().filter_map(Goal::from_row).collect(),
    }
}

fn settle(
    table: &str,
    joined: std::thread::Result<Result<Vec<Value>, StoreError>>,
) -> Vec<Value> {
    match joined {
        Ok(Ok(rows)) => rows,
        Ok(Err(e)) => {
            warn!(table, error = %e, "read failed; continuing with empty collection");
            Vec::new()
        }
        Err(_) => {
            warn!(table, "read thread panicked; continuing with empty collection");
            Vec::new()
        }
    }
}
