// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Category, NEUTRAL_COLOR};
use crate::models::Expense;

/// A reporting period: one calendar month. Dates are naive local calendar
/// values throughout; month bounds never involve instants or timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    // invariant: always the first day of the month
    first: NaiveDate,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("Invalid month {}-{}", year, month))?;
        Ok(MonthKey { first })
    }

    pub fn parse(s: &str) -> Result<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
        Ok(MonthKey { first })
    }

    /// The month a given date falls in.
    pub fn of(date: NaiveDate) -> Self {
        MonthKey { first: date.with_day(1).unwrap_or(date) }
    }

    /// Current local calendar month.
    pub fn current() -> Self {
        MonthKey::of(chrono::Local::now().date_naive())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        let (y, m) = (self.first.year(), self.first.month());
        let day = match m {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if NaiveDate::from_ymd_opt(y, 2, 29).is_some() {
                    29
                } else {
                    28
                }
            }
        };
        NaiveDate::from_ymd_opt(y, m, day).unwrap_or(self.first)
    }

    /// Inclusive on both month bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.first.year(), self.first.month())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total: Decimal,
    pub breakdown: Vec<BreakdownEntry>,
}

impl Report {
    /// The category with the largest sum this month, if any expense matched.
    pub fn dominant(&self) -> Option<&BreakdownEntry> {
        self.breakdown.first()
    }

    /// Share of the dominant category as a percentage. Defined only when the
    /// month total is positive; an empty month yields None, not NaN.
    pub fn dominant_share(&self) -> Option<Decimal> {
        let top = self.breakdown.first()?;
        if self.total > Decimal::ZERO {
            Some(top.value / self.total * Decimal::ONE_HUNDRED)
        } else {
            None
        }
    }
}

/// Aggregate one month of expenses into report figures.
///
/// Pure over its inputs: callers re-run it whenever the expense list or the
/// month selection changes. Expenses are matched against the closed interval
/// [first day, last day] of `month`; sums accumulate per category id in
/// first-occurrence order, then sort by value descending (the sort is stable,
/// so equal sums keep insertion order). Category ids missing from `categories`
/// are still reported, labelled by their raw id with a neutral color.
///
/// `Report.total` always equals the sum of the breakdown values.
pub fn compute_report(expenses: &[Expense], month: MonthKey, categories: &[Category]) -> Report {
    let mut total = Decimal::ZERO;
    let mut sums: Vec<(&str, Decimal)> = Vec::new();

    for e in expenses.iter().filter(|e| month.contains(e.date)) {
        total += e.amount;
        match sums.iter().position(|(id, _)| *id == e.category.as_str()) {
            Some(i) => sums[i].1 += e.amount,
            None => sums.push((e.category.as_str(), e.amount)),
        }
    }

    let mut breakdown: Vec<BreakdownEntry> = sums
        .into_iter()
        .map(|(id, value)| match categories.iter().find(|c| c.id == id) {
            Some(c) => BreakdownEntry {
                name: c.label.to_string(),
                value,
                color: c.color.to_string(),
            },
            None => BreakdownEntry {
                name: id.to_string(),
                value,
                color: NEUTRAL_COLOR.to_string(),
            },
        })
        .collect();
    breakdown.sort_by(|a, b| b.value.cmp(&a.value));

    Report { total, breakdown }
}
