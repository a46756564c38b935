// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{date_or_today, id_of, overlay, text};
use crate::forms::ExpenseForm;
use crate::models::{Expense, RecordId};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("update", sub)) => update(tracker, sub)?,
        Some(("rm", sub)) => remove(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let form = ExpenseForm {
        date: date_or_today(sub),
        amount: text(sub, "amount"),
        category: text(sub, "category"),
        description: text(sub, "description"),
        payment_method: text(sub, "payment-method"),
    };
    let expense = form.validate(RecordId::generate())?;
    let currency = tracker.settings().get().currency;
    let msg = format!(
        "Recorded {} on {} for '{}' ({}) [{}]",
        fmt_money(&expense.amount, &currency),
        expense.date,
        expense.description,
        expense.category,
        expense.id.short()
    );
    tracker.add_expense(expense)?;
    println!("{}", msg);
    Ok(())
}

fn update(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let id = tracker.expenses().resolve(id_of(sub))?;
    let current = tracker
        .expenses()
        .get(&id)
        .with_context(|| format!("Expense '{}' not found", id))?;
    let mut form = ExpenseForm::from(&current);
    overlay(sub, "date", &mut form.date);
    overlay(sub, "amount", &mut form.amount);
    overlay(sub, "category", &mut form.category);
    overlay(sub, "description", &mut form.description);
    overlay(sub, "payment-method", &mut form.payment_method);
    let expense = form.validate(id.clone())?;
    tracker.update_expense(&id, expense)?;
    println!("Updated expense {}", id.short());
    Ok(())
}

fn remove(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let id = tracker.expenses().resolve(id_of(sub))?;
    tracker.delete_expense(&id)?;
    println!("Removed expense {}", id.short());
    Ok(())
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let currency = tracker.settings().get().currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.short().to_string(),
                    e.date.to_string(),
                    fmt_money(&e.amount, &currency),
                    e.category.clone(),
                    e.description.clone(),
                    e.payment_method.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Amount", "Category", "Description", "Payment"],
                rows,
            )
        );
    }
    Ok(())
}

/// Stored expenses filtered by the list arguments, newest first.
pub fn query_rows(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m.trim())?),
        None => None,
    };
    let category = sub.get_one::<String>("category");

    let mut data: Vec<Expense> = tracker
        .expenses()
        .get_all()
        .into_iter()
        .filter(|e| {
            month
                .as_deref()
                .is_none_or(|m| e.date.format("%Y-%m").to_string() == m)
        })
        .filter(|e| category.is_none_or(|c| &e.category == c))
        .collect();
    data.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
