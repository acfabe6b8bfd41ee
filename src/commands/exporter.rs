// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::ExpenseStore;
use anyhow::Result;

pub fn handle(store: &ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(store, sub),
        _ => Ok(()),
    }
}

fn export_expenses(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // list() is newest-first; exports read better oldest-first
    let mut expenses = store.list()?;
    expenses.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "title",
                "amount",
                "category",
                "created_at",
                "updated_at",
            ])?;
            for e in &expenses {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    e.title.clone(),
                    e.amount.to_string(),
                    e.category.clone(),
                    e.created_at.to_string(),
                    e.updated_at.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&expenses)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
