// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Period reports over expenses and incomes.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Expense, Income};
use crate::utils::round_money;

/// Weekly reports keep only this many trailing weeks.
pub const WEEKLY_WINDOW: usize = 8;

pub const CSV_HEADER: [&str; 4] = ["Period", "Income", "Expenses", "Balance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Bucket key; keys of one granularity sort chronologically as strings.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Monthly => date.format("%Y-%m").to_string(),
            Granularity::Yearly => date.format("%Y").to_string(),
            Granularity::Weekly => week_start(date).to_string(),
        }
    }

    pub fn label(&self, key: &str) -> String {
        let parsed = match self {
            Granularity::Monthly => NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d"),
            Granularity::Weekly => NaiveDate::parse_from_str(key, "%Y-%m-%d"),
            Granularity::Yearly => return key.to_string(),
        };
        match (self, parsed) {
            (Granularity::Monthly, Ok(d)) => d.format("%b %Y").to_string(),
            (Granularity::Weekly, Ok(d)) => d.format("%b %-d, %Y").to_string(),
            _ => key.to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            "yearly" | "year" => Ok(Granularity::Yearly),
            other => Err(anyhow!(
                "Unknown period '{}' (use weekly, monthly or yearly)",
                other
            )),
        }
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub period: String,
    pub label: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn aggregate(
    expenses: &[Expense],
    incomes: &[Income],
    granularity: Granularity,
) -> Vec<ReportRow> {
    let mut buckets: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for i in incomes {
        buckets.entry(granularity.bucket_key(i.date)).or_default().0 += i.amount;
    }
    for e in expenses {
        buckets.entry(granularity.bucket_key(e.date)).or_default().1 += e.amount;
    }

    let skip = match granularity {
        Granularity::Weekly => buckets.len().saturating_sub(WEEKLY_WINDOW),
        _ => 0,
    };
    buckets
        .into_iter()
        .skip(skip)
        .map(|(key, (income, spent))| ReportRow {
            label: granularity.label(&key),
            period: key,
            income,
            expenses: spent,
            balance: income - spent,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

pub fn summarize(expenses: &[Expense], incomes: &[Income]) -> Summary {
    let total_income: Decimal = incomes.iter().map(|i| i.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Expense totals per category, largest first.
pub fn spend_by_category(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut agg: HashMap<&str, Decimal> = HashMap::new();
    for e in expenses {
        *agg.entry(e.category.as_str()).or_insert(Decimal::ZERO) += e.amount;
    }
    let mut items: Vec<(String, Decimal)> =
        agg.into_iter().map(|(c, a)| (c.to_string(), a)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

pub fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for r in rows {
        wtr.write_record([
            r.label.clone(),
            format!("{:.2}", round_money(r.income)),
            format!("{:.2}", round_money(r.expenses)),
            format!("{:.2}", round_money(r.balance)),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub period: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn read_csv<R: Read>(input: R) -> Result<Vec<CsvRow>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = rdr.headers()?.clone();
    if headers.iter().ne(CSV_HEADER) {
        return Err(anyhow!(
            "Unexpected report header '{}'",
            headers.iter().collect::<Vec<_>>().join(",")
        ));
    }
    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let num = |i: usize| -> Result<Decimal> {
            let raw = rec.get(i).context("column missing")?.trim();
            raw.parse::<Decimal>()
                .with_context(|| format!("Invalid amount '{}' in {}", raw, CSV_HEADER[i]))
        };
        rows.push(CsvRow {
            period: rec.get(0).context("period missing")?.to_string(),
            income: num(1)?,
            expenses: num(2)?,
            balance: num(3)?,
        });
    }
    Ok(rows)
}
