// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budgets::spent_for;
use crate::records::{Record, RecordStore};
use crate::tracker::Tracker;
use crate::utils::{pretty_table, round_money};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(tracker: &Tracker) -> Result<()> {
    let rows = diagnose(tracker);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

fn duplicate_ids<T: Record>(store: RecordStore<'_, T>, rows: &mut Vec<Vec<String>>) {
    let mut seen = HashSet::new();
    for r in store.get_all() {
        if !seen.insert(r.id().clone()) {
            rows.push(vec![
                "duplicate_id".into(),
                format!("{} {}", T::KEY.export_name(), r.id()),
            ]);
        }
    }
}

pub fn diagnose(tracker: &Tracker) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let expenses = tracker.expenses().get_all();
    let budgets = tracker.budgets().get_all();

    // 1) Budgets whose cached spent no longer matches the expenses
    for b in &budgets {
        let actual = spent_for(&b.category, &expenses);
        if actual != b.spent {
            rows.push(vec![
                "stale_spent".into(),
                format!(
                    "{}: cached {:.2}, actual {:.2}",
                    b.category,
                    round_money(b.spent),
                    round_money(actual)
                ),
            ]);
        }
    }

    // 2) Limits that make a percentage meaningless
    for b in budgets.iter().filter(|b| b.amount <= Decimal::ZERO) {
        rows.push(vec!["zero_budget".into(), b.category.clone()]);
    }

    // 3) More than one budget per category
    let mut cats = HashSet::new();
    for b in &budgets {
        if !cats.insert(b.category.as_str()) {
            rows.push(vec!["duplicate_budget".into(), b.category.clone()]);
        }
    }

    // 4) Budgets no expense is filed under, often a spelling or case mismatch
    let used: HashSet<&str> = expenses.iter().map(|e| e.category.as_str()).collect();
    for b in &budgets {
        if !used.contains(b.category.as_str()) {
            let near = used
                .iter()
                .find(|c| c.eq_ignore_ascii_case(&b.category))
                .map(|c| format!(" (did you mean '{}'?)", c))
                .unwrap_or_default();
            rows.push(vec![
                "budget_without_expenses".into(),
                format!("{}{}", b.category, near),
            ]);
        }
    }

    // 5) Ids must be unique within a collection
    duplicate_ids(tracker.expenses(), &mut rows);
    duplicate_ids(tracker.incomes(), &mut rows);
    duplicate_ids(tracker.budgets(), &mut rows);
    duplicate_ids(tracker.goals(), &mut rows);
    duplicate_ids(tracker.investments(), &mut rows);

    rows
}
