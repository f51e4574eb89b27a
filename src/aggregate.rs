// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The aggregation core: a pure fold over whatever rows the last fetch
//! produced. The snapshot is recomputed from scratch on every refresh and is
//! never stored, so it is always re-derivable from its inputs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::category::{self, EXPENSE_CATEGORIES};
use crate::models::{Budget, Transaction};

/// Derived metrics for one refresh cycle.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateSnapshot {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    /// Percent of income kept, 0 when there is no income.
    pub savings_rate: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    /// Current-month spend per canonical expense category, every category
    /// present even at zero.
    pub monthly_spend: Vec<(String, Decimal)>,
    /// One entry per budget row, in store order (first match wins on
    /// duplicate categories).
    pub budget_status: Vec<BudgetStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub spent: Decimal,
    pub limit: Decimal,
    /// Utilization clamped to 100; 0 when the limit is 0.
    pub percentage: Decimal,
    pub over_budget: bool,
}

/// Outcome of the local pre-checks run before an expense write is issued.
/// These are advisory business conditions, not store errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseCheck {
    Ok,
    /// Hard stop: the expense exceeds the overall balance at fetch time.
    InsufficientBalance { balance: Decimal },
    /// Soft stop: the month's spend in this category would exceed its limit.
    /// The caller may confirm an override, which applies to this one insert.
    OverBudget {
        category: String,
        limit: Decimal,
        spent: Decimal,
    },
}

pub fn aggregate(
    income: &[Transaction],
    expenses: &[Transaction],
    budgets: &[Budget],
    now: DateTime<Utc>,
) -> AggregateSnapshot {
    let total_income: Decimal = income.iter().map(|t| t.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|t| t.amount).sum();
    let balance = total_income - total_expenses;
    let savings_rate = if total_income > Decimal::ZERO {
        balance / total_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let monthly_spend = monthly_category_spend(expenses, now);

    let budget_status = budgets
        .iter()
        .map(|b| {
            let spent = spend_for(&monthly_spend, &b.category);
            BudgetStatus {
                category: b.category.clone(),
                spent,
                limit: b.amount,
                percentage: utilization(spent, b.amount),
                over_budget: spent > b.amount,
            }
        })
        .collect();

    AggregateSnapshot {
        total_income,
        total_expenses,
        balance,
        savings_rate,
        income_count: income.len(),
        expense_count: expenses.len(),
        monthly_spend,
        budget_status,
    }
}

/// Current-month expense totals keyed by canonical category, all categories
/// pre-seeded at zero so absent ones still report.
pub fn monthly_category_spend(
    expenses: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = EXPENSE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), Decimal::ZERO))
        .collect();
    let (start, end) = month_window(now);
    for e in expenses {
        if e.date < start || e.date >= end {
            continue;
        }
        let cat = category::normalize(&e.category, &EXPENSE_CATEGORIES);
        if let Some(entry) = totals.iter_mut().find(|(name, _)| name == cat) {
            entry.1 += e.amount;
        }
    }
    totals
}

/// Run the pre-insert checks for a prospective expense. The balance check is
/// the hard one and wins when both would trigger; the budget check is
/// skipped when the caller has already confirmed an override.
pub fn check_expense(
    category: &str,
    amount: Decimal,
    snapshot: &AggregateSnapshot,
    override_budget: bool,
) -> ExpenseCheck {
    if amount > snapshot.balance {
        return ExpenseCheck::InsufficientBalance {
            balance: snapshot.balance,
        };
    }
    if !override_budget {
        let status = snapshot
            .budget_status
            .iter()
            .find(|s| s.category.eq_ignore_ascii_case(category));
        if let Some(s) = status {
            if s.spent + amount > s.limit {
                return ExpenseCheck::OverBudget {
                    category: s.category.clone(),
                    limit: s.limit,
                    spent: s.spent,
                };
            }
        }
    }
    ExpenseCheck::Ok
}

fn spend_for(monthly_spend: &[(String, Decimal)], budget_category: &str) -> Decimal {
    monthly_spend
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(budget_category))
        .map(|(_, total)| *total)
        .unwrap_or(Decimal::ZERO)
}

fn utilization(spent: Decimal, limit: Decimal) -> Decimal {
    if limit > Decimal::ZERO {
        (spent / limit).min(Decimal::ONE) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Half-open `[first instant of this month, first instant of next month)`.
fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.date_naive();
    let start = first_of_month(today.year(), today.month());
    let end = if today.month() == 12 {
        first_of_month(today.year() + 1, 1)
    } else {
        first_of_month(today.year(), today.month() + 1)
    };
    (start, end)
}

fn first_of_month(year: i32, month: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}
