// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::investments;
use crate::reports::{Granularity, ReportRow, aggregate, spend_by_category, summarize, write_csv};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;

/// `trackify report`
pub fn report(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = build_report(tracker, sub)?;

    if let Some(out) = sub.get_one::<String>("csv") {
        let file = File::create(out).with_context(|| format!("Create {}", out))?;
        write_csv(&rows, file)?;
        tracing::info!(path = %out, rows = rows.len(), "wrote report csv");
        eprintln!("Wrote report to {}", out);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let currency = tracker.settings().get().currency;
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.label.clone(),
                    fmt_money(&r.income, &currency),
                    fmt_money(&r.expenses, &currency),
                    fmt_money(&r.balance, &currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expenses", "Balance"], data)
        );
    }
    Ok(())
}

pub fn build_report(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<Vec<ReportRow>> {
    let period = sub
        .get_one::<String>("period")
        .map(String::as_str)
        .unwrap_or("monthly");
    let granularity: Granularity = period.parse()?;
    Ok(aggregate(
        &tracker.expenses().get_all(),
        &tracker.incomes().get_all(),
        granularity,
    ))
}

#[derive(Serialize)]
struct Dashboard {
    total_income: rust_decimal::Decimal,
    total_expenses: rust_decimal::Decimal,
    balance: rust_decimal::Decimal,
    by_category: Vec<(String, rust_decimal::Decimal)>,
    investments_by_type: Vec<(String, rust_decimal::Decimal)>,
}

/// `trackify summary`
pub fn summary(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let expenses = tracker.expenses().get_all();
    let totals = summarize(&expenses, &tracker.incomes().get_all());
    let dash = Dashboard {
        total_income: totals.total_income,
        total_expenses: totals.total_expenses,
        balance: totals.balance,
        by_category: spend_by_category(&expenses),
        investments_by_type: investments::by_type(&tracker.investments().get_all()),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash)? {
        return Ok(());
    }

    let currency = tracker.settings().get().currency;
    println!(
        "{}",
        pretty_table(
            &["Total income", "Total expenses", "Balance"],
            vec![vec![
                fmt_money(&dash.total_income, &currency),
                fmt_money(&dash.total_expenses, &currency),
                fmt_money(&dash.balance, &currency),
            ]],
        )
    );
    if dash.by_category.is_empty() {
        println!("No expenses recorded yet");
    } else {
        let rows = dash
            .by_category
            .iter()
            .map(|(cat, amt)| {
                let share = if dash.total_expenses.is_zero() {
                    rust_decimal::Decimal::ZERO
                } else {
                    *amt / dash.total_expenses * rust_decimal::Decimal::ONE_HUNDRED
                };
                let share = share
                    .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
                vec![cat.clone(), fmt_money(amt, &currency), format!("{}%", share)]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    if !dash.investments_by_type.is_empty() {
        let rows = dash
            .investments_by_type
            .iter()
            .map(|(t, amt)| vec![t.clone(), fmt_money(amt, &currency)])
            .collect();
        println!("{}", pretty_table(&["Investment type", "Invested"], rows));
    }
    Ok(())
}
