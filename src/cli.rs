// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .help("Record id or an unambiguous prefix of it")
}

fn expense_fields() -> [Arg; 5] {
    [
        opt("date", "Date (YYYY-MM-DD), defaults to today on add"),
        opt("amount", "Amount spent"),
        opt("category", "Category, e.g. Food or Utilities"),
        opt("description", "What the money was spent on"),
        opt("payment-method", "Cash, Credit Card, Debit Card, Bank Transfer"),
    ]
}

fn income_fields() -> [Arg; 4] {
    [
        opt("date", "Date (YYYY-MM-DD), defaults to today on add"),
        opt("amount", "Amount received"),
        opt("source", "Where the money came from"),
        opt("frequency", "One-time, Weekly, Bi-weekly, Monthly or Yearly"),
    ]
}

fn budget_fields() -> [Arg; 2] {
    [
        opt("category", "Expense category the limit applies to"),
        opt("amount", "Spending limit"),
    ]
}

fn goal_fields() -> [Arg; 4] {
    [
        opt("name", "Goal name"),
        opt("target", "Target amount"),
        opt("current", "Amount saved so far"),
        opt("deadline", "Deadline (YYYY-MM-DD)"),
    ]
}

fn investment_fields() -> [Arg; 5] {
    [
        opt("name", "Investment name"),
        opt("amount", "Amount invested"),
        opt("date", "Date (YYYY-MM-DD), defaults to today on add"),
        opt("type", "Stocks, Bonds, Real Estate, Cryptocurrency, Mutual Funds, Other"),
        opt("rate", "Expected annual return in percent"),
    ]
}

fn crud(name: &'static str, about: &'static str, fields: Vec<Arg>, list: Command) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(Command::new("add").args(fields.clone()))
        .subcommand(list)
        .subcommand(Command::new("update").arg(id_arg()).args(fields))
        .subcommand(Command::new("rm").arg(id_arg()))
}

pub fn build_cli() -> Command {
    Command::new("trackify")
        .version(crate_version!())
        .about("Track expenses, income, budgets, savings goals and investments")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Database file (defaults to $TRACKIFY_DB or the platform data dir)"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .global(true)
                .default_value("local")
                .help("Owner whose collections are read and written"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(crud(
            "expense",
            "Record and manage expenses",
            expense_fields().to_vec(),
            Command::new("list")
                .arg(opt("month", "Only this month (YYYY-MM)"))
                .arg(opt("category", "Only this category"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .args(json_flags()),
        ))
        .subcommand(crud(
            "income",
            "Record and manage income",
            income_fields().to_vec(),
            Command::new("list")
                .arg(opt("month", "Only this month (YYYY-MM)"))
                .args(json_flags()),
        ))
        .subcommand(
            crud(
                "budget",
                "Set category spending limits",
                budget_fields().to_vec(),
                Command::new("list").args(json_flags()),
            )
            .subcommand(Command::new("recalc").about("Recompute spent amounts from expenses")),
        )
        .subcommand(crud(
            "goal",
            "Track savings goals",
            goal_fields().to_vec(),
            Command::new("list").args(json_flags()),
        ))
        .subcommand(crud(
            "investment",
            "Track investments",
            investment_fields().to_vec(),
            Command::new("list").args(json_flags()),
        ))
        .subcommand(
            Command::new("settings")
                .about("Show or change preferences")
                .subcommand_required(true)
                .subcommand(Command::new("show").args(json_flags()))
                .subcommand(
                    Command::new("set")
                        .arg(opt("currency", "Currency symbol shown with amounts"))
                        .arg(opt("email", "Email for notifications, empty to clear"))
                        .arg(opt("theme", "light, dark or system")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Income and expenses per week, month or year")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("monthly")
                        .help("weekly, monthly or yearly"),
                )
                .arg(opt("csv", "Also write the report as CSV to this path"))
                .args(json_flags()),
        )
        .subcommand(
            Command::new("summary")
                .about("Totals and spending by category")
                .args(json_flags()),
        )
        .subcommand(
            Command::new("export")
                .about("Write every collection to a JSON file")
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Replace collections from an exported JSON file")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every collection of the profile")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm deletion"),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
