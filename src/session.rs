// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session state as explicit data plus an event reducer. The report month is
//! session-only and never persisted; currency changes are persisted by the
//! caller through the preference store, the session just mirrors the value.

use chrono::NaiveDate;
use std::sync::mpsc::Receiver;

use crate::catalog::{self, Category, Currency};
use crate::models::Expense;
use crate::report::{self, MonthKey, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Record,
    Report,
}

/// Raw input buffers for the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl FormState {
    fn blank(today: NaiveDate) -> Self {
        FormState {
            title: String::new(),
            amount: String::new(),
            category: catalog::CATEGORIES[0].id.to_string(),
            date: today.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    ViewChanged(View),
    MonthSelected(MonthKey),
    CurrencyChanged(&'static Currency),
    /// Fills the form from an existing expense and switches to Record view.
    EditStarted(Expense),
    EditCancelled,
    Submitted,
}

pub struct Session {
    pub view: View,
    pub report_month: MonthKey,
    pub currency: &'static Currency,
    pub form: FormState,
    pub editing: Option<i64>,
    today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Session {
            view: View::Record,
            report_month: MonthKey::of(today),
            currency: catalog::default_currency(),
            form: FormState::blank(today),
            editing: None,
            today,
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ViewChanged(view) => self.view = view,
            Event::MonthSelected(month) => self.report_month = month,
            Event::CurrencyChanged(ccy) => self.currency = ccy,
            Event::EditStarted(e) => {
                self.form = FormState {
                    title: e.title,
                    amount: e.amount.to_string(),
                    category: e.category,
                    date: e.date.to_string(),
                };
                self.editing = Some(e.id);
                self.view = View::Record;
            }
            Event::EditCancelled | Event::Submitted => {
                self.form = FormState::blank(self.today);
                self.editing = None;
            }
        }
    }
}

/// The aggregator's caller: holds a store subscription and re-runs the
/// report computation over the newest delivered snapshot. Each recomputation
/// fully replaces the previous one.
pub struct ReportFeed {
    rx: Receiver<Vec<Expense>>,
    expenses: Vec<Expense>,
}

impl ReportFeed {
    pub fn new(rx: Receiver<Vec<Expense>>) -> Self {
        ReportFeed { rx, expenses: Vec::new() }
    }

    /// Drains pending snapshots, keeping the newest. Returns whether
    /// anything arrived since the last poll.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(snapshot) = self.rx.try_recv() {
            self.expenses = snapshot;
            changed = true;
        }
        changed
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn report(&self, month: MonthKey, categories: &[Category]) -> Report {
        report::compute_report(&self.expenses, month, categories)
    }
}
