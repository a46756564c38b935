// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tracker::Tracker;
use crate::transfer::{ImportReport, import_json};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<ImportReport> {
    let path = m.get_one::<String>("path").context("--path is required")?.trim();
    let json = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    let report = import_json(tracker, &json).with_context(|| format!("Import {}", path))?;
    for (name, count) in &report.imported {
        println!("Imported {} {}", count, name);
    }
    if !report.ignored.is_empty() {
        println!("Ignored unknown keys: {}", report.ignored.join(", "));
    }
    Ok(report)
}
