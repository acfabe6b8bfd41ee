// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Expense persistence plus the currency preference. Consumers never see
//! individual writes: every mutation re-lists the collection and pushes a
//! full ordered snapshot to each subscriber.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::catalog::{self, Currency};
use crate::models::{Expense, ExpenseDraft};

pub struct ExpenseStore {
    conn: Connection,
    listeners: Vec<Sender<Vec<Expense>>>,
}

impl ExpenseStore {
    pub fn new(conn: Connection) -> Self {
        ExpenseStore { conn, listeners: Vec::new() }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn create(&mut self, draft: &ExpenseDraft) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses(title, amount, category, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.title,
                draft.amount.to_string(),
                draft.category,
                draft.date.to_string()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("created expense {}", id);
        self.notify()?;
        Ok(id)
    }

    /// Full replace of title/amount/category/date. `created_at` is left
    /// untouched, `updated_at` is refreshed.
    pub fn update(&mut self, id: i64, draft: &ExpenseDraft) -> Result<()> {
        let n = self.conn.execute(
            "UPDATE expenses SET title=?1, amount=?2, category=?3, date=?4,
             updated_at=datetime('now') WHERE id=?5",
            params![
                draft.title,
                draft.amount.to_string(),
                draft.category,
                draft.date.to_string(),
                id
            ],
        )?;
        if n == 0 {
            anyhow::bail!("Expense {} not found", id);
        }
        self.notify()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let n = self.conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        if n == 0 {
            anyhow::bail!("Expense {} not found", id);
        }
        self.notify()?;
        Ok(())
    }

    /// The full collection, newest first: date desc, then created_at desc,
    /// then id desc so same-second inserts stay deterministic.
    pub fn list(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, amount, category, date, created_at, updated_at
             FROM expenses ORDER BY date DESC, created_at DESC, id DESC",
        )?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let title: String = r.get(1)?;
            let amount_s: String = r.get(2)?;
            let category: String = r.get(3)?;
            let date: chrono::NaiveDate = r.get(4)?;
            let created_at: chrono::NaiveDateTime = r.get(5)?;
            let updated_at: chrono::NaiveDateTime = r.get(6)?;
            let amount = amount_s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid amount '{}' for expense {}", amount_s, id))?;
            data.push(Expense { id, title, amount, category, date, created_at, updated_at });
        }
        Ok(data)
    }

    /// Snapshot feed: the current list is delivered immediately, then a
    /// fresh snapshot after every create/update/delete.
    pub fn subscribe(&mut self) -> Result<Receiver<Vec<Expense>>> {
        let (tx, rx) = mpsc::channel();
        tx.send(self.list()?).ok();
        self.listeners.push(tx);
        Ok(rx)
    }

    fn notify(&mut self) -> Result<()> {
        if self.listeners.is_empty() {
            return Ok(());
        }
        let snapshot = self.list()?;
        self.listeners.retain(|tx| tx.send(snapshot.clone()).is_ok());
        log::debug!("notified {} subscriber(s)", self.listeners.len());
        Ok(())
    }
}

// Currency preference. A single settings key with upsert semantics: writing
// it never touches other settings rows.

pub fn get_currency(conn: &Connection) -> Result<&'static Currency> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='currency'", [], |r| r.get(0))
        .optional()?;
    match v {
        Some(code) => match catalog::currency_for(&code) {
            Some(ccy) => Ok(ccy),
            None => {
                log::warn!("stored currency '{}' is not supported, using default", code);
                Ok(catalog::default_currency())
            }
        },
        None => Ok(catalog::default_currency()),
    }
}

pub fn set_currency(conn: &Connection, code: &str) -> Result<&'static Currency> {
    let ccy = catalog::currency_for(code)
        .with_context(|| format!("Unknown currency '{}' (supported: USD, INR)", code))?;
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![ccy.code],
    )?;
    Ok(ccy)
}
