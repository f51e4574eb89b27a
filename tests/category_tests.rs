// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pesowise::category::{color_for, normalize, EXPENSE_CATEGORIES, INCOME_CATEGORIES};

#[test]
fn matches_canonical_names_case_insensitively() {
    assert_eq!(normalize("food", &EXPENSE_CATEGORIES), "Food");
    assert_eq!(normalize("FOOD", &EXPENSE_CATEGORIES), "Food");
    assert_eq!(normalize("Transport", &EXPENSE_CATEGORIES), "Transport");
    assert_eq!(normalize("saLAry", &INCOME_CATEGORIES), "Salary");
}

#[test]
fn unmatched_input_folds_into_fallback() {
    assert_eq!(normalize("Groceries", &EXPENSE_CATEGORIES), "Etc.");
    assert_eq!(normalize("", &EXPENSE_CATEGORIES), "Etc.");
    assert_eq!(normalize("   ", &EXPENSE_CATEGORIES), "Etc.");
    assert_eq!(normalize("lottery", &INCOME_CATEGORIES), "Others");
}

#[test]
fn normalize_is_idempotent() {
    for raw in ["food", "Groceries", "", "Bills", "shopping", "whatever"] {
        let once = normalize(raw, &EXPENSE_CATEGORIES);
        let twice = normalize(once, &EXPENSE_CATEGORIES);
        assert_eq!(once, twice);
    }
}

#[test]
fn trims_whitespace_before_matching() {
    assert_eq!(normalize("  bills ", &EXPENSE_CATEGORIES), "Bills");
}

#[test]
fn canonical_categories_have_fixed_colors() {
    // same category, same color, regardless of position
    assert_eq!(color_for("Food", 0), color_for("Food", 5));
    assert_eq!(color_for("Food", 0), "#3A6B55");
    assert_eq!(color_for("bills", 3), "#2D9CDB");
    assert_eq!(color_for("Salary", 1), "#3A6B55");
}

#[test]
fn ad_hoc_labels_cycle_the_palette_stably() {
    assert_eq!(color_for("Mystery", 2), color_for("Mystery", 2));
    assert_ne!(color_for("Mystery", 0), color_for("Mystery", 1));
}
