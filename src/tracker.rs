// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry point for mutations that affect derived data.
//!
//! Budget `spent` values are a cached projection of the expenses. Every
//! expense or budget write made through [`Tracker`] recalculates them before
//! returning. Writes made directly through a [`RecordStore`] do not.

use anyhow::Result;

use crate::budgets;
use crate::forms::ValidationError;
use crate::models::{Budget, Expense, Goal, Income, Investment, RecordId};
use crate::records::{RecordStore, SettingsStore};
use crate::store::KvStore;

pub struct Tracker {
    store: KvStore,
}

impl Tracker {
    pub fn new(store: KvStore) -> Self {
        Tracker { store }
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    pub fn into_store(self) -> KvStore {
        self.store
    }

    pub fn expenses(&self) -> RecordStore<'_, Expense> {
        RecordStore::new(&self.store)
    }

    pub fn incomes(&self) -> RecordStore<'_, Income> {
        RecordStore::new(&self.store)
    }

    pub fn budgets(&self) -> RecordStore<'_, Budget> {
        RecordStore::new(&self.store)
    }

    pub fn goals(&self) -> RecordStore<'_, Goal> {
        RecordStore::new(&self.store)
    }

    pub fn investments(&self) -> RecordStore<'_, Investment> {
        RecordStore::new(&self.store)
    }

    pub fn settings(&self) -> SettingsStore<'_> {
        SettingsStore::new(&self.store)
    }

    pub fn recalculate_budgets(&self) -> Result<Vec<Budget>> {
        budgets::recalculate(&self.store)
    }

    pub fn add_expense(&self, expense: Expense) -> Result<()> {
        self.expenses().add(expense)?;
        self.recalculate_budgets()?;
        Ok(())
    }

    pub fn update_expense(&self, id: &RecordId, expense: Expense) -> Result<bool> {
        let found = self.expenses().update(id, expense)?;
        if found {
            self.recalculate_budgets()?;
        }
        Ok(found)
    }

    pub fn delete_expense(&self, id: &RecordId) -> Result<bool> {
        let found = self.expenses().delete(id)?;
        if found {
            self.recalculate_budgets()?;
        }
        Ok(found)
    }

    /// Rejects a second budget for a category that already has one.
    pub fn add_budget(&self, budget: Budget) -> Result<()> {
        self.ensure_unique_category(&budget.category, None)?;
        self.budgets().add(budget)?;
        self.recalculate_budgets()?;
        Ok(())
    }

    pub fn update_budget(&self, id: &RecordId, budget: Budget) -> Result<bool> {
        if self.budgets().get(id).is_none() {
            return Ok(false);
        }
        self.ensure_unique_category(&budget.category, Some(id))?;
        let found = self.budgets().update(id, budget)?;
        if found {
            self.recalculate_budgets()?;
        }
        Ok(found)
    }

    /// Other budgets keep their `spent`, so nothing is recalculated.
    pub fn delete_budget(&self, id: &RecordId) -> Result<bool> {
        self.budgets().delete(id)
    }

    fn ensure_unique_category(
        &self,
        category: &str,
        except: Option<&RecordId>,
    ) -> Result<(), ValidationError> {
        let clash = self
            .budgets()
            .get_all()
            .iter()
            .any(|b| b.category == category && Some(&b.id) != except);
        if clash {
            return Err(ValidationError::DuplicateBudget(category.to_string()));
        }
        Ok(())
    }
}
