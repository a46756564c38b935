// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Investment;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub expected_annual_return: Decimal,
}

/// Yearly return of one position at its stated rate.
pub fn expected_return(inv: &Investment) -> Decimal {
    inv.amount * inv.return_rate / Decimal::ONE_HUNDRED
}

pub fn summarize(investments: &[Investment]) -> PortfolioSummary {
    PortfolioSummary {
        total_invested: investments.iter().map(|i| i.amount).sum(),
        expected_annual_return: investments.iter().map(expected_return).sum(),
    }
}

/// Invested amount per investment type, largest first.
pub fn by_type(investments: &[Investment]) -> Vec<(String, Decimal)> {
    let mut out: Vec<(String, Decimal)> = Vec::new();
    for inv in investments {
        match out.iter_mut().find(|(t, _)| *t == inv.r#type) {
            Some((_, total)) => *total += inv.amount,
            None => out.push((inv.r#type.clone(), inv.amount)),
        }
    }
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
