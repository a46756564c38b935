// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tracker::Tracker;
use crate::transfer::export_json;
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").context("--out is required")?;
    let doc = export_json(tracker)?;
    std::fs::write(out, doc).with_context(|| format!("Write {}", out))?;
    println!("Exported profile '{}' to {}", tracker.store().owner(), out);
    Ok(())
}
