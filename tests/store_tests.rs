// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendclip::db;
use spendclip::models::{ExpenseDraft, ValidationError};
use spendclip::store::ExpenseStore;

fn setup() -> ExpenseStore {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    ExpenseStore::new(conn)
}

fn draft(title: &str, amount: &str, category: &str, date: &str) -> ExpenseDraft {
    ExpenseDraft {
        title: title.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[test]
fn create_assigns_ids_and_lists_newest_date_first() {
    let mut store = setup();
    let a = store.create(&draft("coffee", "4.50", "Food", "2025-01-02")).unwrap();
    let b = store.create(&draft("train", "12", "Travel", "2025-01-05")).unwrap();
    let c = store.create(&draft("socks", "9", "Clothes", "2025-01-03")).unwrap();
    assert!(a < b && b < c);

    let list = store.list().unwrap();
    let dates: Vec<String> = list.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-01-05", "2025-01-03", "2025-01-02"]);
}

#[test]
fn same_date_ties_break_by_newest_creation() {
    let mut store = setup();
    store.create(&draft("first", "1", "Food", "2025-01-02")).unwrap();
    let second = store.create(&draft("second", "2", "Food", "2025-01-02")).unwrap();
    let list = store.list().unwrap();
    assert_eq!(list[0].id, second);
    assert_eq!(list[0].title, "second");
}

#[test]
fn update_is_a_full_replace_and_keeps_created_at() {
    let mut store = setup();
    let id = store.create(&draft("lunhc", "8", "Food", "2025-02-01")).unwrap();
    let created_at = store.list().unwrap()[0].created_at;

    store
        .update(id, &draft("lunch", "9.50", "Entertainment", "2025-02-02"))
        .unwrap();
    let list = store.list().unwrap();
    assert_eq!(list.len(), 1);
    let e = &list[0];
    assert_eq!(e.id, id);
    assert_eq!(e.title, "lunch");
    assert_eq!(e.amount, "9.50".parse::<Decimal>().unwrap());
    assert_eq!(e.category, "Entertainment");
    assert_eq!(e.date.to_string(), "2025-02-02");
    assert_eq!(e.created_at, created_at);
}

#[test]
fn update_unknown_id_is_an_error() {
    let mut store = setup();
    assert!(store.update(41, &draft("x", "1", "Food", "2025-01-01")).is_err());
}

#[test]
fn delete_removes_and_unknown_id_is_an_error() {
    let mut store = setup();
    let id = store.create(&draft("cinema", "15", "Entertainment", "2025-03-08")).unwrap();
    store.delete(id).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(store.delete(id).is_err());
}

#[test]
fn subscribe_delivers_initial_snapshot_then_one_per_write() {
    let mut store = setup();
    let rx = store.subscribe().unwrap();
    assert!(rx.recv().unwrap().is_empty());

    let id = store.create(&draft("groceries", "42", "Food", "2025-04-01")).unwrap();
    let snap = rx.recv().unwrap();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].title, "groceries");

    store.update(id, &draft("groceries+", "43", "Food", "2025-04-01")).unwrap();
    assert_eq!(rx.recv().unwrap()[0].title, "groceries+");

    store.delete(id).unwrap();
    assert!(rx.recv().unwrap().is_empty());
}

#[test]
fn dropped_subscribers_do_not_break_writes() {
    let mut store = setup();
    let rx = store.subscribe().unwrap();
    drop(rx);
    store.create(&draft("still fine", "1", "Other", "2025-05-01")).unwrap();
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn drafts_are_validated_before_the_store() {
    assert_eq!(
        draft("  ", "5", "Food", "2025-01-01").validate(),
        Err(ValidationError::EmptyTitle)
    );
    assert!(matches!(
        draft("tea", "0", "Food", "2025-01-01").validate(),
        Err(ValidationError::NonPositiveAmount(_))
    ));
    assert!(matches!(
        draft("tea", "-2", "Food", "2025-01-01").validate(),
        Err(ValidationError::NonPositiveAmount(_))
    ));
    assert_eq!(
        draft("tea", "5", "Snacks", "2025-01-01").validate(),
        Err(ValidationError::UnknownCategory("Snacks".into()))
    );
    assert!(draft("tea", "5", "Food", "2025-01-01").validate().is_ok());
}
