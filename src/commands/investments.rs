// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{date_or_today, id_of, overlay, text};
use crate::forms::InvestmentForm;
use crate::investments::{expected_return, summarize};
use crate::models::{Investment, RecordId};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let form = InvestmentForm {
                name: text(sub, "name"),
                amount: text(sub, "amount"),
                date: date_or_today(sub),
                r#type: text(sub, "type"),
                return_rate: text(sub, "rate"),
            };
            let inv = form.validate(RecordId::generate())?;
            let msg = format!("Added investment '{}' [{}]", inv.name, inv.id.short());
            tracker.investments().add(inv)?;
            println!("{}", msg);
        }
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("update", sub)) => {
            let id = tracker.investments().resolve(id_of(sub))?;
            let current = tracker
                .investments()
                .get(&id)
                .with_context(|| format!("Investment '{}' not found", id))?;
            let mut form = InvestmentForm::from(&current);
            overlay(sub, "name", &mut form.name);
            overlay(sub, "amount", &mut form.amount);
            overlay(sub, "date", &mut form.date);
            overlay(sub, "type", &mut form.r#type);
            overlay(sub, "rate", &mut form.return_rate);
            tracker
                .investments()
                .update(&id, form.validate(id.clone())?)?;
            println!("Updated investment {}", id.short());
        }
        Some(("rm", sub)) => {
            let id = tracker.investments().resolve(id_of(sub))?;
            tracker.investments().delete(&id)?;
            println!("Removed investment {}", id.short());
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Listing {
    investments: Vec<Investment>,
    summary: crate::investments::PortfolioSummary,
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut investments = tracker.investments().get_all();
    investments.sort_by(|a, b| b.date.cmp(&a.date));
    let summary = summarize(&investments);

    if jsonl_flag {
        maybe_print_json(false, true, &investments)?;
        return Ok(());
    }
    let listing = Listing {
        investments,
        summary,
    };
    if maybe_print_json(json_flag, false, &listing)? {
        return Ok(());
    }

    let currency = tracker.settings().get().currency;
    let rows: Vec<Vec<String>> = listing
        .investments
        .iter()
        .map(|i| {
            vec![
                i.id.short().to_string(),
                i.name.clone(),
                i.r#type.clone(),
                i.date.to_string(),
                fmt_money(&i.amount, &currency),
                format!("{}%", i.return_rate),
                fmt_money(&expected_return(i), &currency),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Name", "Type", "Date", "Amount", "Rate", "Yearly return"],
            rows
        )
    );
    println!(
        "Total invested: {}  Expected yearly return: {}",
        fmt_money(&listing.summary.total_invested, &currency),
        fmt_money(&listing.summary.expected_annual_return, &currency)
    );
    Ok(())
}
