// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Goal;

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: Goal,
    /// `None` for a zero target. May exceed 100 when overachieved.
    pub percentage: Option<Decimal>,
    pub achieved: bool,
    /// Negative once the deadline has passed.
    pub days_left: i64,
}

impl GoalProgress {
    pub fn new(goal: Goal, today: NaiveDate) -> Self {
        let percentage = if goal.target_amount > Decimal::ZERO {
            Some(goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED)
        } else {
            None
        };
        let achieved = goal.current_amount >= goal.target_amount;
        let days_left = (goal.deadline - today).num_days();
        GoalProgress {
            goal,
            percentage,
            achieved,
            days_left,
        }
    }

    pub fn remaining(&self) -> Decimal {
        (self.goal.target_amount - self.goal.current_amount).max(Decimal::ZERO)
    }
}
