// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, TimeZone, Utc};
use pesowise::aggregate::{aggregate, check_expense, ExpenseCheck};
use pesowise::models::{Budget, Transaction};
use rust_decimal::Decimal;

fn ts(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
}

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

fn tx(id: &str, amount: i64, category: &str, date: DateTime<Utc>) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: format!("tx {}", id),
        amount: dec(amount),
        category: category.to_string(),
        date,
    }
}

fn budget(category: &str, amount: i64) -> Budget {
    Budget {
        id: format!("b-{}", category),
        category: category.to_string(),
        amount: dec(amount),
        period: "monthly".to_string(),
        end_date: None,
    }
}

fn now() -> DateTime<Utc> {
    ts(2025, 8, 20)
}

#[test]
fn totals_balance_and_savings_rate() {
    let income = vec![tx("i1", 5000, "Salary", ts(2025, 8, 1))];
    let expenses = vec![tx("e1", 2000, "food", ts(2025, 8, 5))];
    let budgets = vec![budget("Food", 1000)];
    let snap = aggregate(&income, &expenses, &budgets, now());

    assert_eq!(snap.total_income, dec(5000));
    assert_eq!(snap.total_expenses, dec(2000));
    assert_eq!(snap.balance, dec(3000));
    assert_eq!(snap.savings_rate, dec(60));
    assert_eq!(snap.income_count, 1);
    assert_eq!(snap.expense_count, 1);

    // "food" folds into Food; the budget is blown and utilization clamps.
    let food = &snap.budget_status[0];
    assert_eq!(food.category, "Food");
    assert_eq!(food.spent, dec(2000));
    assert_eq!(food.limit, dec(1000));
    assert_eq!(food.percentage, dec(100));
    assert!(food.over_budget);
}

#[test]
fn empty_inputs_yield_zeroed_snapshot_with_seeded_categories() {
    let snap = aggregate(&[], &[], &[], now());
    assert_eq!(snap.total_income, Decimal::ZERO);
    assert_eq!(snap.total_expenses, Decimal::ZERO);
    assert_eq!(snap.balance, Decimal::ZERO);
    assert_eq!(snap.savings_rate, Decimal::ZERO);
    assert_eq!(snap.monthly_spend.len(), 5);
    assert!(snap.monthly_spend.iter().all(|(_, v)| v.is_zero()));
    assert!(snap.budget_status.is_empty());
}

#[test]
fn savings_rate_is_zero_without_income() {
    let expenses = vec![tx("e1", 100, "Bills", ts(2025, 8, 2))];
    let snap = aggregate(&[], &expenses, &[], now());
    assert_eq!(snap.savings_rate, Decimal::ZERO);
    assert_eq!(snap.balance, dec(-100));
}

#[test]
fn prior_month_expenses_stay_out_of_monthly_spend() {
    let expenses = vec![
        tx("e1", 300, "Food", ts(2025, 7, 31)),
        tx("e2", 200, "Food", ts(2025, 8, 1)),
    ];
    let snap = aggregate(&[], &expenses, &[], now());
    let food = snap
        .monthly_spend
        .iter()
        .find(|(name, _)| name == "Food")
        .map(|(_, v)| *v);
    assert_eq!(food, Some(dec(200)));
    // the all-time total still counts both
    assert_eq!(snap.total_expenses, dec(500));
}

#[test]
fn unknown_expense_categories_fold_into_fallback() {
    let expenses = vec![tx("e1", 77, "Groceries", ts(2025, 8, 3))];
    let snap = aggregate(&[], &expenses, &[], now());
    let etc = snap
        .monthly_spend
        .iter()
        .find(|(name, _)| name == "Etc.")
        .map(|(_, v)| *v);
    assert_eq!(etc, Some(dec(77)));
}

#[test]
fn budget_lookup_ignores_case_and_honors_store_order() {
    let expenses = vec![tx("e1", 600, "bills", ts(2025, 8, 10))];
    let budgets = vec![budget("BILLS", 500), budget("bills", 9999)];
    let income = vec![tx("i1", 10000, "Salary", ts(2025, 8, 1))];
    let snap = aggregate(&income, &expenses, &budgets, now());
    assert_eq!(snap.budget_status.len(), 2);
    assert!(snap.budget_status[0].over_budget);
    assert!(!snap.budget_status[1].over_budget);

    // the first matching row decides the pre-check outcome
    match check_expense("Bills", dec(1), &snap, false) {
        ExpenseCheck::OverBudget { limit, spent, .. } => {
            assert_eq!(limit, dec(500));
            assert_eq!(spent, dec(600));
        }
        other => panic!("expected OverBudget, got {:?}", other),
    }
}

#[test]
fn zero_limit_budget_reports_zero_utilization() {
    let budgets = vec![budget("Shopping", 0)];
    let snap = aggregate(&[], &[], &budgets, now());
    assert_eq!(snap.budget_status[0].percentage, Decimal::ZERO);
    assert!(!snap.budget_status[0].over_budget);
}

#[test]
fn insufficient_balance_is_a_hard_stop() {
    let income = vec![tx("i1", 300, "Salary", ts(2025, 8, 1))];
    let snap = aggregate(&income, &[], &[], now());
    match check_expense("Food", dec(400), &snap, false) {
        ExpenseCheck::InsufficientBalance { balance } => assert_eq!(balance, dec(300)),
        other => panic!("expected InsufficientBalance, got {:?}", other),
    }
}

#[test]
fn balance_check_wins_over_budget_check() {
    let income = vec![tx("i1", 30, "Salary", ts(2025, 8, 1))];
    let budgets = vec![budget("Food", 10)];
    let snap = aggregate(&income, &[], &budgets, now());
    // both checks would fire; the hard one reports. Override does not
    // loosen it either.
    assert!(matches!(
        check_expense("Food", dec(50), &snap, false),
        ExpenseCheck::InsufficientBalance { .. }
    ));
    assert!(matches!(
        check_expense("Food", dec(50), &snap, true),
        ExpenseCheck::InsufficientBalance { .. }
    ));
}

#[test]
fn budget_override_skips_only_the_budget_check() {
    let income = vec![tx("i1", 1000, "Salary", ts(2025, 8, 1))];
    let budgets = vec![budget("Bills", 40)];
    let snap = aggregate(&income, &[], &budgets, now());
    assert!(matches!(
        check_expense("Bills", dec(50), &snap, false),
        ExpenseCheck::OverBudget { .. }
    ));
    assert_eq!(check_expense("Bills", dec(50), &snap, true), ExpenseCheck::Ok);
}

#[test]
fn spending_exactly_to_the_limit_passes() {
    let income = vec![tx("i1", 1000, "Salary", ts(2025, 8, 1))];
    let budgets = vec![budget("Food", 100)];
    let snap = aggregate(&income, &[], &budgets, now());
    assert_eq!(check_expense("Food", dec(100), &snap, false), ExpenseCheck::Ok);
}
