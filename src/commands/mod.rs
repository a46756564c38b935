// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod incomes;
pub mod budgets;
pub mod goals;
pub mod investments;
pub mod settings;
pub mod reports;
pub mod exporter;
pub mod importer;
pub mod doctor;

use chrono::{Local, NaiveDate};

/// Raw text of an optional argument, empty when absent.
pub(crate) fn text(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

/// Replace `field` with the argument's text when it was given.
pub(crate) fn overlay(sub: &clap::ArgMatches, name: &str, field: &mut String) {
    if let Some(v) = sub.get_one::<String>(name) {
        *field = v.clone();
    }
}

/// Date argument for new records; today when omitted.
pub(crate) fn date_or_today(sub: &clap::ArgMatches) -> String {
    sub.get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| today().to_string())
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn id_of(sub: &clap::ArgMatches) -> &str {
    sub.get_one::<String>("id").map(String::as_str).unwrap_or("")
}
