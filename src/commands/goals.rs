// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{id_of, overlay, text, today};
use crate::forms::GoalForm;
use crate::goals::GoalProgress;
use crate::models::RecordId;
use crate::tracker::Tracker;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let form = GoalForm {
                name: text(sub, "name"),
                target_amount: text(sub, "target"),
                current_amount: text(sub, "current"),
                deadline: text(sub, "deadline"),
            };
            let goal = form.validate(RecordId::generate())?;
            let msg = format!("Added goal '{}' [{}]", goal.name, goal.id.short());
            tracker.goals().add(goal)?;
            println!("{}", msg);
        }
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("update", sub)) => {
            let id = tracker.goals().resolve(id_of(sub))?;
            let current = tracker
                .goals()
                .get(&id)
                .with_context(|| format!("Goal '{}' not found", id))?;
            let mut form = GoalForm::from(&current);
            overlay(sub, "name", &mut form.name);
            overlay(sub, "target", &mut form.target_amount);
            overlay(sub, "current", &mut form.current_amount);
            overlay(sub, "deadline", &mut form.deadline);
            tracker.goals().update(&id, form.validate(id.clone())?)?;
            println!("Updated goal {}", id.short());
        }
        Some(("rm", sub)) => {
            let id = tracker.goals().resolve(id_of(sub))?;
            tracker.goals().delete(&id)?;
            println!("Removed goal {}", id.short());
        }
        _ => {}
    }
    Ok(())
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = today();
    let mut data: Vec<GoalProgress> = tracker
        .goals()
        .get_all()
        .into_iter()
        .map(|g| GoalProgress::new(g, now))
        .collect();
    data.sort_by(|a, b| a.goal.deadline.cmp(&b.goal.deadline));

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let currency = tracker.settings().get().currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                let status = if p.achieved {
                    "achieved".to_string()
                } else if p.days_left < 0 {
                    format!("{} days overdue", -p.days_left)
                } else {
                    format!("{} days left", p.days_left)
                };
                vec![
                    p.goal.id.short().to_string(),
                    p.goal.name.clone(),
                    format!(
                        "{} / {}",
                        fmt_money(&p.goal.current_amount, &currency),
                        fmt_money(&p.goal.target_amount, &currency)
                    ),
                    fmt_percent(p.percentage),
                    p.goal.deadline.to_string(),
                    status,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Goal", "Saved", "Progress", "Deadline", "Status"],
                rows
            )
        );
    }
    Ok(())
}
