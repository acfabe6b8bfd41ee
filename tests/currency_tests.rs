// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendclip::catalog;
use spendclip::db;
use spendclip::store::{get_currency, set_currency};
use spendclip::utils::fmt_money;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn defaults_to_usd_when_unset() {
    let conn = setup();
    let ccy = get_currency(&conn).unwrap();
    assert_eq!(ccy.code, "USD");
    assert_eq!(ccy.symbol, "$");
    assert_eq!(ccy.decimals, 2);
}

#[test]
fn set_then_get_round_trip() {
    let conn = setup();
    set_currency(&conn, "INR").unwrap();
    let ccy = get_currency(&conn).unwrap();
    assert_eq!(ccy.code, "INR");
    assert_eq!(ccy.symbol, "₹");
    assert_eq!(ccy.decimals, 0);
}

#[test]
fn unknown_code_is_rejected() {
    let conn = setup();
    assert!(set_currency(&conn, "EUR").is_err());
    // nothing was written
    assert_eq!(get_currency(&conn).unwrap().code, "USD");
}

#[test]
fn writing_the_preference_leaves_other_settings_untouched() {
    let conn = setup();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('schema_version', '1')",
        [],
    )
    .unwrap();
    set_currency(&conn, "INR").unwrap();
    set_currency(&conn, "USD").unwrap();
    let v: String = conn
        .query_row(
            "SELECT value FROM settings WHERE key='schema_version'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(v, "1");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings WHERE key='currency'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 1);
}

#[test]
fn unsupported_stored_code_falls_back_to_default() {
    let conn = setup();
    conn.execute("INSERT INTO settings(key, value) VALUES('currency', 'EUR')", [])
        .unwrap();
    assert_eq!(get_currency(&conn).unwrap().code, "USD");
}

#[test]
fn money_formatting_follows_the_currency_convention() {
    let usd = catalog::currency_for("USD").unwrap();
    let inr = catalog::currency_for("INR").unwrap();
    let amount = "1234.56".parse::<Decimal>().unwrap();
    assert_eq!(fmt_money(&amount, usd), "$1234.56");
    assert_eq!(fmt_money(&amount, inr), "₹1235");
    let whole = "50".parse::<Decimal>().unwrap();
    assert_eq!(fmt_money(&whole, usd), "$50.00");
    assert_eq!(fmt_money(&whole, inr), "₹50");
}
