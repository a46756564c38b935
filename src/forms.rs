// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Text-in, typed-record-out conversion for everything a user submits.
//!
//! Form fields are always raw strings. `validate` parses each one exactly
//! once and either yields a record or the first problem found.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    Budget, Expense, Frequency, Goal, Income, Investment, RecordId, Settings, Theme,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Invalid {field} '{value}', expected a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("Invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("Unknown frequency '{0}' (use One-time, Weekly, Bi-weekly, Monthly or Yearly)")]
    UnknownFrequency(String),
    #[error("Unknown theme '{0}' (use light, dark or system)")]
    UnknownTheme(String),
    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
    #[error("A budget for category '{0}' already exists")]
    DuplicateBudget(String),
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },
}

fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let v = raw.trim();
    if v.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(v.to_string())
    }
}

fn decimal(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let v = required(field, raw)?;
    v.parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidNumber { field, value: v })
}

fn positive(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let d = decimal(field, raw)?;
    if d <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(d)
}

fn non_negative(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let d = decimal(field, raw)?;
    if d < Decimal::ZERO {
        return Err(ValidationError::Negative(field));
    }
    Ok(d)
}

fn date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let v = required(field, raw)?;
    NaiveDate::parse_from_str(&v, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field, value: v })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub payment_method: String,
}

impl ExpenseForm {
    pub fn validate(&self, id: RecordId) -> Result<Expense, ValidationError> {
        Ok(Expense {
            id,
            date: date("date", &self.date)?,
            amount: positive("amount", &self.amount)?,
            category: required("category", &self.category)?,
            description: required("description", &self.description)?,
            payment_method: required("payment method", &self.payment_method)?,
        })
    }
}

impl From<&Expense> for ExpenseForm {
    fn from(e: &Expense) -> Self {
        ExpenseForm {
            date: e.date.to_string(),
            amount: e.amount.to_string(),
            category: e.category.clone(),
            description: e.description.clone(),
            payment_method: e.payment_method.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeForm {
    pub date: String,
    pub amount: String,
    pub source: String,
    pub frequency: String,
}

impl IncomeForm {
    pub fn validate(&self, id: RecordId) -> Result<Income, ValidationError> {
        let date = date("date", &self.date)?;
        let amount = positive("amount", &self.amount)?;
        let source = required("source", &self.source)?;
        let raw = required("frequency", &self.frequency)?;
        let frequency = raw
            .parse::<Frequency>()
            .map_err(|_| ValidationError::UnknownFrequency(raw))?;
        Ok(Income {
            id,
            date,
            amount,
            source,
            frequency,
        })
    }
}

impl From<&Income> for IncomeForm {
    fn from(i: &Income) -> Self {
        IncomeForm {
            date: i.date.to_string(),
            amount: i.amount.to_string(),
            source: i.source.clone(),
            frequency: i.frequency.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
}

impl BudgetForm {
    /// `spent` starts at zero; the tracker recomputes it on save.
    pub fn validate(&self, id: RecordId) -> Result<Budget, ValidationError> {
        Ok(Budget {
            id,
            category: required("category", &self.category)?,
            amount: non_negative("amount", &self.amount)?,
            spent: Decimal::ZERO,
        })
    }
}

impl From<&Budget> for BudgetForm {
    fn from(b: &Budget) -> Self {
        BudgetForm {
            category: b.category.clone(),
            amount: b.amount.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: String,
}

impl GoalForm {
    pub fn validate(&self, id: RecordId) -> Result<Goal, ValidationError> {
        let current = if self.current_amount.trim().is_empty() {
            Decimal::ZERO
        } else {
            non_negative("current amount", &self.current_amount)?
        };
        Ok(Goal {
            id,
            name: required("name", &self.name)?,
            target_amount: non_negative("target amount", &self.target_amount)?,
            current_amount: current,
            deadline: date("deadline", &self.deadline)?,
        })
    }
}

impl From<&Goal> for GoalForm {
    fn from(g: &Goal) -> Self {
        GoalForm {
            name: g.name.clone(),
            target_amount: g.target_amount.to_string(),
            current_amount: g.current_amount.to_string(),
            deadline: g.deadline.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestmentForm {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub r#type: String,
    pub return_rate: String,
}

impl InvestmentForm {
    pub fn validate(&self, id: RecordId) -> Result<Investment, ValidationError> {
        let return_rate = if self.return_rate.trim().is_empty() {
            Decimal::ZERO
        } else {
            decimal("return rate", &self.return_rate)?
        };
        Ok(Investment {
            id,
            name: required("name", &self.name)?,
            amount: positive("amount", &self.amount)?,
            date: date("date", &self.date)?,
            r#type: required("type", &self.r#type)?,
            return_rate,
        })
    }
}

impl From<&Investment> for InvestmentForm {
    fn from(i: &Investment) -> Self {
        InvestmentForm {
            name: i.name.clone(),
            amount: i.amount.to_string(),
            date: i.date.to_string(),
            r#type: i.r#type.clone(),
            return_rate: i.return_rate.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub currency: String,
    pub email: String,
    pub theme: String,
}

impl SettingsForm {
    pub fn validate(&self) -> Result<Settings, ValidationError> {
        let currency = required("currency", &self.currency)?;
        let email = self.email.trim().to_string();
        if !email.is_empty() && !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        let raw = required("theme", &self.theme)?;
        let theme = raw
            .parse::<Theme>()
            .map_err(|_| ValidationError::UnknownTheme(raw))?;
        Ok(Settings {
            currency,
            email,
            theme,
        })
    }
}

impl From<&Settings> for SettingsForm {
    fn from(s: &Settings) -> Self {
        SettingsForm {
            currency: s.currency.clone(),
            email: s.email.clone(),
            theme: s.theme.as_str().to_string(),
        }
    }
}
