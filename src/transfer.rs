// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-profile JSON export and import.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::forms::ValidationError;
use crate::models::{Budget, Expense, Goal, Income, Investment, Settings};
use crate::records::Record;
use crate::store::StoreKey;
use crate::tracker::Tracker;

pub const EXPORTED_AT: &str = "exportedAt";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub exported_at: DateTime<Utc>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub investments: Vec<Investment>,
    pub settings: Settings,
}

pub fn snapshot(tracker: &Tracker) -> Snapshot {
    Snapshot {
        exported_at: Utc::now(),
        expenses: tracker.expenses().get_all(),
        incomes: tracker.incomes().get_all(),
        budgets: tracker.budgets().get_all(),
        goals: tracker.goals().get_all(),
        investments: tracker.investments().get_all(),
        settings: tracker.settings().get(),
    }
}

pub fn export_json(tracker: &Tracker) -> Result<String> {
    let snap = snapshot(tracker);
    tracing::info!(
        expenses = snap.expenses.len(),
        incomes = snap.incomes.len(),
        budgets = snap.budgets.len(),
        goals = snap.goals.len(),
        investments = snap.investments.len(),
        "exporting profile"
    );
    Ok(serde_json::to_string_pretty(&snap)?)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Collections overwritten, with their record counts.
    pub imported: Vec<(String, usize)>,
    /// Top-level keys that were not recognized.
    pub ignored: Vec<String>,
}

/// Collections decoded from a document, before anything is written.
#[derive(Default)]
struct Decoded {
    expenses: Option<Vec<Expense>>,
    incomes: Option<Vec<Income>>,
    budgets: Option<Vec<Budget>>,
    goals: Option<Vec<Goal>>,
    investments: Option<Vec<Investment>>,
    settings: Option<Settings>,
}

fn decode<T: DeserializeOwned>(doc: &mut Map<String, Value>, key: StoreKey) -> Result<Option<T>> {
    match doc.remove(key.export_name()) {
        Some(v) => serde_json::from_value(v)
            .with_context(|| format!("Invalid '{}' collection", key.export_name()))
            .map(Some),
        None => Ok(None),
    }
}

fn ensure_unique_ids<T: Record>(records: Option<&Vec<T>>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for r in records.into_iter().flatten() {
        if !seen.insert(r.id()) {
            return Err(ValidationError::DuplicateId {
                collection: T::KEY.export_name(),
                id: r.id().to_string(),
            });
        }
    }
    Ok(())
}

impl Decoded {
    /// Same constraints the tracker enforces on single writes.
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_unique_ids(self.expenses.as_ref())?;
        ensure_unique_ids(self.incomes.as_ref())?;
        ensure_unique_ids(self.budgets.as_ref())?;
        ensure_unique_ids(self.goals.as_ref())?;
        ensure_unique_ids(self.investments.as_ref())?;

        let mut categories = HashSet::new();
        for b in self.budgets.iter().flatten() {
            if !categories.insert(b.category.as_str()) {
                return Err(ValidationError::DuplicateBudget(b.category.clone()));
            }
        }
        Ok(())
    }
}

fn write_collection<T: Record>(
    tracker: &Tracker,
    records: Option<Vec<T>>,
    report: &mut ImportReport,
) -> Result<()> {
    if let Some(records) = records {
        tracker.store().set(T::KEY.as_str(), &records)?;
        report
            .imported
            .push((T::KEY.export_name().to_string(), records.len()));
    }
    Ok(())
}

/// Overwrite every collection present in `json`. A malformed collection,
/// a repeated id or a second budget for one category aborts the import
/// before anything is written; unknown keys are skipped.
pub fn import_json(tracker: &Tracker, json: &str) -> Result<ImportReport> {
    let value: Value = serde_json::from_str(json).context("Import file is not valid JSON")?;
    let Value::Object(mut doc) = value else {
        return Err(anyhow!("Import document must be a JSON object"));
    };
    doc.remove(EXPORTED_AT);

    let decoded = Decoded {
        expenses: decode(&mut doc, StoreKey::Expenses)?,
        incomes: decode(&mut doc, StoreKey::Incomes)?,
        budgets: decode(&mut doc, StoreKey::Budgets)?,
        goals: decode(&mut doc, StoreKey::Goals)?,
        investments: decode(&mut doc, StoreKey::Investments)?,
        settings: decode(&mut doc, StoreKey::Settings)?,
    };
    decoded.validate()?;

    let mut report = ImportReport {
        ignored: doc.keys().cloned().collect(),
        ..ImportReport::default()
    };
    write_collection(tracker, decoded.expenses, &mut report)?;
    write_collection(tracker, decoded.incomes, &mut report)?;
    write_collection(tracker, decoded.budgets, &mut report)?;
    write_collection(tracker, decoded.goals, &mut report)?;
    write_collection(tracker, decoded.investments, &mut report)?;
    if let Some(settings) = decoded.settings {
        tracker.settings().save(&settings)?;
        report
            .imported
            .push((StoreKey::Settings.export_name().to_string(), 1));
    }
    tracker.recalculate_budgets()?;

    tracing::info!(
        collections = report.imported.len(),
        ignored = report.ignored.len(),
        "imported profile"
    );
    Ok(report)
}
