// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Budget, Expense};
use crate::records::RecordStore;
use crate::store::KvStore;

/// Sum of expenses filed under `category`. Matching is exact and case-sensitive.
pub fn spent_for(category: &str, expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

pub fn apply_spent(budgets: &mut [Budget], expenses: &[Expense]) {
    for b in budgets.iter_mut() {
        b.spent = spent_for(&b.category, expenses);
    }
}

/// Recompute every budget's `spent` from the stored expenses and write all
/// budgets back in one batch.
pub fn recalculate(store: &KvStore) -> Result<Vec<Budget>> {
    let expenses = RecordStore::<Expense>::new(store).get_all();
    let budgets_store = RecordStore::<Budget>::new(store);
    let mut budgets = budgets_store.get_all();
    apply_spent(&mut budgets, &expenses);
    budgets_store.save_all(&budgets)?;
    tracing::info!(
        budgets = budgets.len(),
        expenses = expenses.len(),
        "recalculated budget spending"
    );
    Ok(budgets)
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgress {
    pub budget: Budget,
    /// `None` when the limit is zero or negative.
    pub percentage: Option<Decimal>,
    pub remaining: Decimal,
    pub over_budget: bool,
}

impl BudgetProgress {
    pub fn new(budget: Budget) -> Self {
        let percentage = if budget.amount > Decimal::ZERO {
            Some(budget.spent / budget.amount * Decimal::ONE_HUNDRED)
        } else {
            None
        };
        let remaining = budget.amount - budget.spent;
        let over_budget = budget.spent > budget.amount;
        BudgetProgress {
            budget,
            percentage,
            remaining,
            over_budget,
        }
    }

    /// Percentage clamped for a progress bar. A degenerate limit shows full
    /// once anything is spent and empty otherwise.
    pub fn bar_percentage(&self) -> Decimal {
        match self.percentage {
            Some(p) => p.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            None if self.budget.spent > Decimal::ZERO => Decimal::ONE_HUNDRED,
            None => Decimal::ZERO,
        }
    }
}
