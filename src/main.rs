// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use std::path::Path;

use trackify::store::{DEFAULT_OWNER, KvStore};
use trackify::tracker::Tracker;
use trackify::{cli, commands, db, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_arg = matches.get_one::<String>("db").map(Path::new);
    let profile = matches
        .get_one::<String>("profile")
        .map(String::as_str)
        .unwrap_or(DEFAULT_OWNER);
    let conn = db::open_or_init(db_arg)?;
    let tracker = Tracker::new(KvStore::new(conn, profile)?);

    match matches.subcommand() {
        Some(("init", _)) => match db_arg {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some(("expense", sub)) => commands::expenses::handle(&tracker, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&tracker, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&tracker, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&tracker, sub)?,
        Some(("investment", sub)) => commands::investments::handle(&tracker, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&tracker, sub)?,
        Some(("report", sub)) => commands::reports::report(&tracker, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&tracker, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&tracker, sub)?,
        Some(("import", sub)) => {
            commands::importer::handle(&tracker, sub)?;
        }
        Some(("clear", sub)) => {
            if !sub.get_flag("yes") {
                bail!("Refusing to delete all data of '{}' without --yes", profile);
            }
            tracker.store().clear_all()?;
            println!("Cleared all data of profile '{}'", profile);
        }
        Some(("doctor", _)) => commands::doctor::handle(&tracker)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
