// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::Days;
use common::{date, dec, expense, income};
use rust_decimal::Decimal;
use trackify::goals::GoalProgress;
use trackify::investments;
use trackify::models::{Goal, Investment, RecordId};
use trackify::reports::{
    Granularity, aggregate, read_csv, spend_by_category, summarize, write_csv,
};
use trackify::utils::{fmt_money, fmt_percent, round_money};

#[test]
fn monthly_buckets_in_chronological_order() {
    let expenses = vec![
        expense("2024-02-10", "50", "Food"),
        expense("2024-01-05", "100", "Food"),
    ];
    let incomes = vec![income("2024-01-01", "200")];
    let rows = aggregate(&expenses, &incomes, Granularity::Monthly);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Jan 2024");
    assert_eq!(rows[0].period, "2024-01");
    assert_eq!(rows[0].income, dec("200"));
    assert_eq!(rows[0].expenses, dec("100"));
    assert_eq!(rows[0].balance, dec("100"));
    assert_eq!(rows[1].label, "Feb 2024");
    assert_eq!(rows[1].income, Decimal::ZERO);
    assert_eq!(rows[1].expenses, dec("50"));
    assert_eq!(rows[1].balance, dec("-50"));
}

#[test]
fn yearly_buckets() {
    let expenses = vec![
        expense("2023-12-31", "10", "Food"),
        expense("2024-06-01", "5", "Food"),
    ];
    let incomes = vec![income("2024-01-01", "20"), income("2024-12-31", "1")];
    let rows = aggregate(&expenses, &incomes, Granularity::Yearly);
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["2023", "2024"]);
    assert_eq!(rows[1].balance, dec("16"));
}

#[test]
fn weekly_keeps_last_eight_weeks() {
    let first_sunday = date("2024-01-07");
    // One expense mid-week in each of 12 consecutive weeks
    let expenses: Vec<_> = (0..12u64)
        .map(|w| {
            let d = first_sunday + Days::new(w * 7 + 3);
            expense(&d.to_string(), "10", "Food")
        })
        .collect();
    let rows = aggregate(&expenses, &[], Granularity::Weekly);

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].period, "2024-02-04");
    assert_eq!(rows[0].label, "Feb 4, 2024");
    assert_eq!(rows[7].period, "2024-03-24");
    assert!(rows.windows(2).all(|w| w[0].period < w[1].period));
}

#[test]
fn weekly_groups_by_sunday_start() {
    // Sat 2024-01-13 and Sun 2024-01-14 fall in different weeks
    let expenses = vec![
        expense("2024-01-13", "1", "Food"),
        expense("2024-01-14", "2", "Food"),
        expense("2024-01-20", "4", "Food"),
    ];
    let rows = aggregate(&expenses, &[], Granularity::Weekly);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period, "2024-01-07");
    assert_eq!(rows[1].period, "2024-01-14");
    assert_eq!(rows[1].expenses, dec("6"));
}

#[test]
fn csv_round_trip_keeps_labels_and_totals() {
    let expenses = vec![
        expense("2024-01-05", "100.25", "Food"),
        expense("2024-01-20", "0.006", "Food"),
        expense("2024-02-10", "50", "Food"),
        expense("2024-02-11", "0.125", "Food"),
    ];
    let incomes = vec![income("2024-01-01", "200.1"), income("2024-01-15", "0.999")];
    let rows = aggregate(&expenses, &incomes, Granularity::Monthly);

    let mut buf = Vec::new();
    write_csv(&rows, &mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with("Period,Income,Expenses,Balance\n"));
    // 201.099 / 100.256 / 100.843
    assert!(text.contains("Jan 2024,201.10,100.26,100.84"));
    // halves round away from zero
    assert!(text.contains("Feb 2024,0.00,50.13,-50.13"));

    let parsed = read_csv(buf.as_slice()).unwrap();
    assert_eq!(parsed.len(), rows.len());
    for (p, r) in parsed.iter().zip(&rows) {
        assert_eq!(p.period, r.label);
        assert_eq!(p.income, round_money(r.income));
        assert_eq!(p.expenses, round_money(r.expenses));
        assert_eq!(p.balance, round_money(r.balance));
    }
}

#[test]
fn money_and_percent_display_round_to_nearest() {
    assert_eq!(fmt_money(&dec("10.005"), "$"), "$10.01");
    assert_eq!(fmt_money(&dec("0.999"), "€"), "€1.00");
    assert_eq!(fmt_money(&dec("-2.345"), "$"), "-$2.35");
    assert_eq!(fmt_money(&dec("-0.001"), "$"), "$0.00");
    assert_eq!(fmt_money(&dec("7"), "$"), "$7.00");
    assert_eq!(fmt_percent(Some(dec("66.666"))), "66.7%");
    assert_eq!(fmt_percent(None), "n/a");
}

#[test]
fn weekly_labels_with_commas_survive_csv() {
    let rows = aggregate(
        &[expense("2024-01-10", "3", "Food")],
        &[],
        Granularity::Weekly,
    );
    let mut buf = Vec::new();
    write_csv(&rows, &mut buf).unwrap();
    let parsed = read_csv(buf.as_slice()).unwrap();
    assert_eq!(parsed[0].period, "Jan 7, 2024");
}

#[test]
fn read_csv_rejects_foreign_header() {
    let err = read_csv("Month,In,Out\n2024-01,1,2\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("Unexpected report header"));
}

#[test]
fn granularity_parses_user_input() {
    assert_eq!("Weekly".parse::<Granularity>().unwrap(), Granularity::Weekly);
    assert_eq!(" month ".parse::<Granularity>().unwrap(), Granularity::Monthly);
    assert!("daily".parse::<Granularity>().is_err());
}

#[test]
fn summary_and_category_breakdown() {
    let expenses = vec![
        expense("2024-01-05", "30", "Food"),
        expense("2024-01-06", "70", "Utilities"),
        expense("2024-01-07", "10", "Food"),
    ];
    let incomes = vec![income("2024-01-01", "90")];
    let s = summarize(&expenses, &incomes);
    assert_eq!(s.total_income, dec("90"));
    assert_eq!(s.total_expenses, dec("110"));
    assert_eq!(s.balance, dec("-20"));

    let by_cat = spend_by_category(&expenses);
    assert_eq!(
        by_cat,
        vec![
            ("Utilities".to_string(), dec("70")),
            ("Food".to_string(), dec("40")),
        ]
    );
}

#[test]
fn goal_progress_handles_overachievement_and_deadlines() {
    let goal = Goal {
        id: RecordId::generate(),
        name: "Emergency fund".into(),
        target_amount: dec("1000"),
        current_amount: dec("1250"),
        deadline: date("2024-03-01"),
    };
    let p = GoalProgress::new(goal.clone(), date("2024-03-11"));
    assert!(p.achieved);
    assert_eq!(p.percentage, Some(dec("125")));
    assert_eq!(p.days_left, -10);
    assert_eq!(p.remaining(), Decimal::ZERO);

    let zero = Goal {
        target_amount: Decimal::ZERO,
        current_amount: Decimal::ZERO,
        ..goal
    };
    assert_eq!(GoalProgress::new(zero, date("2024-01-01")).percentage, None);
}

#[test]
fn portfolio_totals() {
    let inv = |amount: &str, rate: &str, kind: &str| Investment {
        id: RecordId::generate(),
        name: kind.to_string(),
        amount: dec(amount),
        date: date("2024-01-01"),
        r#type: kind.to_string(),
        return_rate: dec(rate),
    };
    let all = vec![
        inv("1000", "5", "Bonds"),
        inv("2000", "0", "Stocks"),
        inv("500", "-10", "Bonds"),
    ];
    let s = investments::summarize(&all);
    assert_eq!(s.total_invested, dec("3500"));
    assert_eq!(s.expected_annual_return, dec("0"));
    assert_eq!(
        investments::by_type(&all),
        vec![
            ("Stocks".to_string(), dec("2000")),
            ("Bonds".to_string(), dec("1500")),
        ]
    );
}
