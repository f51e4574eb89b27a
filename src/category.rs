// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Canonical category sets and the normalizer applied to every raw category
//! string before aggregation. Categories coming back from the store are
//! free-form; everything that does not match a canonical name folds into the
//! final fallback entry of the set.

/// Expense categories, in display order. The last entry is the fallback.
pub const EXPENSE_CATEGORIES: [&str; 5] = ["Food", "Transport", "Bills", "Shopping", "Etc."];

/// Income categories, in display order. The last entry is the fallback.
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Business", "Freelance", "Gift", "Others"];

/// Palette cycled for ad hoc category labels in pie charts.
pub const PIE_PALETTE: [&str; 7] = [
    "#3A6B55", "#D48380", "#C9A84C", "#7C6FCD", "#4A9FC7", "#E8845A", "#56A0A0",
];

/// Map a raw category string onto the canonical set, case-insensitively.
/// Unmatched (including empty) input returns the set's fallback entry.
/// Total and idempotent: canonical names map to themselves.
pub fn normalize<'a>(raw: &str, set: &[&'a str]) -> &'a str {
    let raw = raw.trim();
    set.iter()
        .find(|c| c.eq_ignore_ascii_case(raw))
        .or(set.last())
        .copied()
        .unwrap_or("Etc.")
}

/// Fixed color for a canonical category, or a stable palette pick for ad hoc
/// labels. `position` is the label's index within its series so the same
/// label keeps the same color across renders.
pub fn color_for(category: &str, position: usize) -> &'static str {
    let fixed = match category.to_ascii_lowercase().as_str() {
        "food" | "salary" => Some("#3A6B55"),
        "transport" | "business" => Some("#F2994A"),
        "bills" | "freelance" => Some("#2D9CDB"),
        "shopping" | "gift" => Some("#EB5757"),
        "etc." | "etc" | "others" => Some("#9B51E0"),
        _ => None,
    };
    fixed.unwrap_or(PIE_PALETTE[position % PIE_PALETTE.len()])
}
