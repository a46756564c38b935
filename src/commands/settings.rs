// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::overlay;
use crate::forms::SettingsForm;
use crate::tracker::Tracker;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let settings = tracker.settings().get();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &settings)? {
                let email = if settings.email.is_empty() {
                    "(none)".to_string()
                } else {
                    settings.email.clone()
                };
                let rows = vec![
                    vec!["currency".to_string(), settings.currency.clone()],
                    vec!["email".to_string(), email],
                    vec!["theme".to_string(), settings.theme.as_str().to_string()],
                ];
                println!("{}", pretty_table(&["Setting", "Value"], rows));
            }
        }
        Some(("set", sub)) => {
            let mut form = SettingsForm::from(&tracker.settings().get());
            overlay(sub, "currency", &mut form.currency);
            overlay(sub, "email", &mut form.email);
            overlay(sub, "theme", &mut form.theme);
            let settings = form.validate()?;
            tracker.settings().save(&settings)?;
            println!("Settings saved");
        }
        _ => {}
    }
    Ok(())
}
