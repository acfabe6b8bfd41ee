// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::report::{compute_report, BreakdownEntry, MonthKey};
use crate::store::{self, ExpenseStore};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct DominantView {
    name: String,
    value: Decimal,
    share_pct: Decimal,
}

#[derive(Serialize)]
struct ReportView {
    month: String,
    currency: &'static str,
    total: Decimal,
    breakdown: Vec<BreakdownEntry>,
    dominant: Option<DominantView>,
}

fn month(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(s) => MonthKey::parse(s)?,
        None => MonthKey::current(),
    };

    let ccy = store::get_currency(store.conn())?;
    let expenses = store.list()?;
    let report = compute_report(&expenses, month, &catalog::CATEGORIES);

    // share is only defined for a positive total
    let dominant = match (report.dominant(), report.dominant_share()) {
        (Some(top), Some(share)) => Some(DominantView {
            name: top.name.clone(),
            value: top.value,
            share_pct: share.round_dp(1),
        }),
        _ => None,
    };

    let view = ReportView {
        month: month.to_string(),
        currency: ccy.code,
        total: report.total,
        breakdown: report.breakdown.clone(),
        dominant,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &view)? {
        println!("Report for {}", month);
        match &view.dominant {
            Some(d) => println!("Highest spend: {} ({}% of total)", d.name, d.share_pct),
            None => println!("Highest spend: no data"),
        }
        let rows: Vec<Vec<String>> = report
            .breakdown
            .iter()
            .map(|b| vec![b.name.clone(), fmt_money(&b.value, ccy)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
        println!("Total: {}", fmt_money(&report.total, ccy));
    }
    Ok(())
}
