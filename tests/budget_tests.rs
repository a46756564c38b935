// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{budget, dec, expense, setup};
use rust_decimal::Decimal;
use trackify::budgets::{BudgetProgress, recalculate};
use trackify::forms::ValidationError;
use trackify::models::RecordId;

#[test]
fn recalculate_sums_exact_category_matches() {
    let tracker = setup();
    // Raw store writes do not trigger recalculation
    tracker.budgets().add(budget("Food", "200")).unwrap();
    tracker.budgets().add(budget("Travel", "50")).unwrap();
    tracker.expenses().add(expense("2024-01-02", "12.50", "Food")).unwrap();
    tracker.expenses().add(expense("2024-02-02", "7.50", "Food")).unwrap();
    tracker.expenses().add(expense("2024-02-03", "99", "food")).unwrap();
    assert!(tracker.budgets().get_all().iter().all(|b| b.spent.is_zero()));

    let budgets = recalculate(tracker.store()).unwrap();
    assert_eq!(budgets[0].spent, dec("20.00"));
    assert_eq!(budgets[1].spent, Decimal::ZERO);
    assert_eq!(tracker.budgets().get_all(), budgets);
}

#[test]
fn recalculate_is_idempotent() {
    let tracker = setup();
    tracker.budgets().add(budget("Food", "200")).unwrap();
    tracker.expenses().add(expense("2024-01-02", "30", "Food")).unwrap();
    let first = recalculate(tracker.store()).unwrap();
    let second = recalculate(tracker.store()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tracker_keeps_spent_current_across_expense_mutations() {
    let tracker = setup();
    tracker.add_budget(budget("Food", "100")).unwrap();
    let spent = || tracker.budgets().get_all()[0].spent;

    let lunch = expense("2024-01-02", "15", "Food");
    tracker.add_expense(lunch.clone()).unwrap();
    assert_eq!(spent(), dec("15"));

    let mut bigger = lunch.clone();
    bigger.amount = dec("40");
    assert!(tracker.update_expense(&lunch.id, bigger).unwrap());
    assert_eq!(spent(), dec("40"));

    let mut moved = lunch.clone();
    moved.category = "Shopping".into();
    tracker.update_expense(&lunch.id, moved).unwrap();
    assert_eq!(spent(), Decimal::ZERO);

    tracker.add_expense(expense("2024-01-03", "5", "Food")).unwrap();
    assert!(tracker.delete_expense(&lunch.id).unwrap());
    assert_eq!(spent(), dec("5"));
}

#[test]
fn new_budget_starts_with_existing_spending() {
    let tracker = setup();
    tracker.add_expense(expense("2024-01-02", "25", "Utilities")).unwrap();
    let mut b = budget("Utilities", "80");
    b.spent = dec("9999");
    tracker.add_budget(b).unwrap();
    assert_eq!(tracker.budgets().get_all()[0].spent, dec("25"));
}

#[test]
fn duplicate_budget_category_rejected() {
    let tracker = setup();
    tracker.add_budget(budget("Food", "100")).unwrap();
    let err = tracker.add_budget(budget("Food", "50")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::DuplicateBudget("Food".into()))
    );
    assert_eq!(tracker.budgets().get_all().len(), 1);

    // Renaming onto another budget's category is rejected too
    let travel = budget("Travel", "10");
    tracker.add_budget(travel.clone()).unwrap();
    assert!(tracker.update_budget(&travel.id, budget("Food", "10")).is_err());
    // Keeping its own category is fine
    assert!(tracker.update_budget(&travel.id, budget("Travel", "20")).unwrap());
}

#[test]
fn updating_missing_budget_is_a_no_op_even_onto_taken_category() {
    let tracker = setup();
    tracker.add_budget(budget("Food", "100")).unwrap();
    let before = tracker.budgets().get_all();

    let missing = RecordId::from("no-such-budget");
    assert!(!tracker.update_budget(&missing, budget("Food", "5")).unwrap());
    assert!(!tracker.update_budget(&missing, budget("Travel", "5")).unwrap());
    assert_eq!(tracker.budgets().get_all(), before);
}

#[test]
fn deleting_budget_frees_its_category() {
    let tracker = setup();
    tracker.add_expense(expense("2024-01-05", "30", "Food")).unwrap();
    let food = budget("Food", "100");
    tracker.add_budget(food.clone()).unwrap();
    tracker.add_budget(budget("Travel", "50")).unwrap();

    assert!(tracker.delete_budget(&food.id).unwrap());
    assert!(!tracker.delete_budget(&food.id).unwrap());
    let left = tracker.budgets().get_all();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].category, "Travel");

    let again = budget("Food", "80");
    tracker.add_budget(again.clone()).unwrap();
    assert_eq!(tracker.budgets().get(&again.id).unwrap().spent, dec("30"));
}

#[test]
fn progress_reports_percentage_and_overrun() {
    let mut b = budget("Food", "50");
    b.spent = dec("75");
    let p = BudgetProgress::new(b);
    assert_eq!(p.percentage, Some(dec("150")));
    assert!(p.over_budget);
    assert_eq!(p.remaining, dec("-25"));
    assert_eq!(p.bar_percentage(), Decimal::ONE_HUNDRED);
}

#[test]
fn zero_limit_has_no_percentage() {
    let mut b = budget("Food", "0");
    let idle = BudgetProgress::new(b.clone());
    assert_eq!(idle.percentage, None);
    assert_eq!(idle.bar_percentage(), Decimal::ZERO);

    b.spent = dec("3");
    let spent = BudgetProgress::new(b);
    assert_eq!(spent.percentage, None);
    assert!(spent.over_budget);
    assert_eq!(spent.bar_percentage(), Decimal::ONE_HUNDRED);
}
