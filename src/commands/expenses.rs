// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, ExpenseDraft};
use crate::report::MonthKey;
use crate::store::{self, ExpenseStore};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn draft_from_args(sub: &clap::ArgMatches) -> Result<ExpenseDraft> {
    let title = sub.get_one::<String>("title").unwrap().clone();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(ExpenseDraft { title, amount, category, date })
}

fn add(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_args(sub)?;
    draft.validate()?;
    let id = store.create(&draft)?;
    println!(
        "Recorded '{}' {} ({}) on {} (id: {})",
        draft.title, draft.amount, draft.category, draft.date, id
    );
    Ok(())
}

fn edit(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let draft = draft_from_args(sub)?;
    draft.validate()?;
    store.update(id, &draft)?;
    println!("Updated expense {}", id);
    Ok(())
}

fn rm(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete(id)?;
    println!("Deleted expense {}", id);
    Ok(())
}

fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let expenses = store.list()?;
    let data = query_rows(&expenses, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = store::get_currency(store.conn())?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.title.clone(),
                    fmt_money(&r.amount, ccy),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Title", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}

/// Applies the list filters to an already-ordered snapshot. Filtering stays
/// in memory: the store's snapshot is the source of truth and collections
/// are personal-finance sized.
pub fn query_rows(expenses: &[Expense], sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => Some(MonthKey::parse(s)?),
        None => None,
    };
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for e in expenses {
        if let Some(m) = month {
            if !m.contains(e.date) {
                continue;
            }
        }
        if let Some(c) = category {
            if &e.category != c {
                continue;
            }
        }
        data.push(ExpenseRow {
            id: e.id,
            date: e.date.to_string(),
            title: e.title.clone(),
            amount: e.amount,
            category: e.category.clone(),
        });
        if let Some(l) = limit {
            if data.len() == l {
                break;
            }
        }
    }
    Ok(data)
}
