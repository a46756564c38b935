// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{id_of, overlay, text};
use crate::budgets::BudgetProgress;
use crate::forms::BudgetForm;
use crate::models::RecordId;
use crate::tracker::Tracker;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("update", sub)) => update(tracker, sub)?,
        Some(("rm", sub)) => {
            let id = tracker.budgets().resolve(id_of(sub))?;
            tracker.delete_budget(&id)?;
            println!("Removed budget {}", id.short());
        }
        Some(("recalc", _)) => {
            let budgets = tracker.recalculate_budgets()?;
            println!("Recalculated {} budget(s)", budgets.len());
        }
        _ => {}
    }
    Ok(())
}

fn add(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let form = BudgetForm {
        category: text(sub, "category"),
        amount: text(sub, "amount"),
    };
    let budget = form.validate(RecordId::generate())?;
    let currency = tracker.settings().get().currency;
    let msg = format!(
        "Budget set for {} = {} [{}]",
        budget.category,
        fmt_money(&budget.amount, &currency),
        budget.id.short()
    );
    tracker.add_budget(budget)?;
    println!("{}", msg);
    Ok(())
}

fn update(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let id = tracker.budgets().resolve(id_of(sub))?;
    let current = tracker
        .budgets()
        .get(&id)
        .with_context(|| format!("Budget '{}' not found", id))?;
    let mut form = BudgetForm::from(&current);
    overlay(sub, "category", &mut form.category);
    overlay(sub, "amount", &mut form.amount);
    tracker.update_budget(&id, form.validate(id.clone())?)?;
    println!("Updated budget {}", id.short());
    Ok(())
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data: Vec<BudgetProgress> = tracker
        .budgets()
        .get_all()
        .into_iter()
        .map(BudgetProgress::new)
        .collect();
    data.sort_by(|a, b| a.budget.category.cmp(&b.budget.category));

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let currency = tracker.settings().get().currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.budget.id.short().to_string(),
                    p.budget.category.clone(),
                    fmt_money(&p.budget.amount, &currency),
                    fmt_money(&p.budget.spent, &currency),
                    fmt_money(&p.remaining, &currency),
                    fmt_percent(p.percentage),
                    if p.over_budget { "over" } else { "" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Category", "Budget", "Spent", "Remaining", "Used", ""],
                rows
            )
        );
    }
    Ok(())
}
