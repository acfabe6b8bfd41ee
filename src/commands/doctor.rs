// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Read-only integrity checks over the raw rows. Reports, never repairs:
/// an unknown category id is still reportable (fallback entry), but worth
/// surfacing.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt = conn.prepare("SELECT id, amount, category, date FROM expenses ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount_s: String = r.get(1)?;
        let category: String = r.get(2)?;
        let date_s: String = r.get(3)?;

        if catalog::category_for(&category).is_none() {
            rows.push(vec![
                "unknown_category".into(),
                format!("expense {}: '{}'", id, category),
            ]);
        }
        match amount_s.parse::<Decimal>() {
            Ok(a) if a <= Decimal::ZERO => rows.push(vec![
                "non_positive_amount".into(),
                format!("expense {}: {}", id, amount_s),
            ]),
            Err(_) => rows.push(vec![
                "bad_amount".into(),
                format!("expense {}: '{}'", id, amount_s),
            ]),
            _ => {}
        }
        if chrono::NaiveDate::parse_from_str(&date_s, "%Y-%m-%d").is_err() {
            rows.push(vec![
                "bad_date".into(),
                format!("expense {}: '{}'", id, date_s),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
