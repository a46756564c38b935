// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{date_or_today, id_of, overlay, text};
use crate::forms::IncomeForm;
use crate::models::{Income, RecordId};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("update", sub)) => update(tracker, sub)?,
        Some(("rm", sub)) => {
            let id = tracker.incomes().resolve(id_of(sub))?;
            tracker.incomes().delete(&id)?;
            println!("Removed income {}", id.short());
        }
        _ => {}
    }
    Ok(())
}

fn add(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let form = IncomeForm {
        date: date_or_today(sub),
        amount: text(sub, "amount"),
        source: text(sub, "source"),
        frequency: text(sub, "frequency"),
    };
    let income = form.validate(RecordId::generate())?;
    let currency = tracker.settings().get().currency;
    let msg = format!(
        "Recorded {} income from '{}' on {} ({}) [{}]",
        fmt_money(&income.amount, &currency),
        income.source,
        income.date,
        income.frequency,
        income.id.short()
    );
    tracker.incomes().add(income)?;
    println!("{}", msg);
    Ok(())
}

fn update(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let id = tracker.incomes().resolve(id_of(sub))?;
    let current = tracker
        .incomes()
        .get(&id)
        .with_context(|| format!("Income '{}' not found", id))?;
    let mut form = IncomeForm::from(&current);
    overlay(sub, "date", &mut form.date);
    overlay(sub, "amount", &mut form.amount);
    overlay(sub, "source", &mut form.source);
    overlay(sub, "frequency", &mut form.frequency);
    tracker.incomes().update(&id, form.validate(id.clone())?)?;
    println!("Updated income {}", id.short());
    Ok(())
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m.trim())?),
        None => None,
    };
    let mut data: Vec<Income> = tracker
        .incomes()
        .get_all()
        .into_iter()
        .filter(|i| {
            month
                .as_deref()
                .is_none_or(|m| i.date.format("%Y-%m").to_string() == m)
        })
        .collect();
    data.sort_by(|a, b| b.date.cmp(&a.date));

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let currency = tracker.settings().get().currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|i| {
                vec![
                    i.id.short().to_string(),
                    i.date.to_string(),
                    fmt_money(&i.amount, &currency),
                    i.source.clone(),
                    i.frequency.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Amount", "Source", "Frequency"], rows)
        );
    }
    Ok(())
}
