// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use trackify::models::{Budget, Expense, Frequency, Income, RecordId};
use trackify::store::KvStore;
use trackify::tracker::Tracker;

pub fn setup() -> Tracker {
    Tracker::new(KvStore::open_in_memory().unwrap())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn expense(on: &str, amount: &str, category: &str) -> Expense {
    Expense {
        id: RecordId::generate(),
        date: date(on),
        amount: dec(amount),
        category: category.to_string(),
        description: format!("{} purchase", category),
        payment_method: "Cash".to_string(),
    }
}

pub fn income(on: &str, amount: &str) -> Income {
    Income {
        id: RecordId::generate(),
        date: date(on),
        amount: dec(amount),
        source: "Salary".to_string(),
        frequency: Frequency::Monthly,
    }
}

pub fn budget(category: &str, amount: &str) -> Budget {
    Budget {
        id: RecordId::generate(),
        category: category.to_string(),
        amount: dec(amount),
        spent: Decimal::ZERO,
    }
}
