// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{dec, expense, setup};
use trackify::models::{Expense, Goal, RecordId, Settings, Theme};
use trackify::records::RecordStore;
use trackify::store::StoreKey;

#[test]
fn get_all_keeps_insertion_order() {
    let tracker = setup();
    let store = tracker.expenses();
    let a = expense("2024-03-01", "10", "Food");
    let b = expense("2024-01-01", "20", "Food");
    let c = expense("2024-02-01", "30", "Utilities");
    for e in [&a, &b, &c] {
        store.add(e.clone()).unwrap();
    }
    assert_eq!(store.get_all(), vec![a, b, c]);
}

#[test]
fn update_replaces_fields_but_keeps_id() {
    let tracker = setup();
    let store = tracker.expenses();
    let original = expense("2024-01-05", "100", "Food");
    let other = expense("2024-01-06", "5", "Food");
    store.add(original.clone()).unwrap();
    store.add(other.clone()).unwrap();

    let mut changed = expense("2024-02-01", "42.50", "Shopping");
    changed.id = RecordId::from("some-other-id");
    assert!(store.update(&original.id, changed.clone()).unwrap());

    let stored = store.get(&original.id).unwrap();
    assert_eq!(stored.id, original.id);
    assert_eq!(stored.amount, dec("42.50"));
    assert_eq!(stored.category, "Shopping");
    assert_eq!(stored.date, changed.date);
    assert_eq!(store.get(&other.id).unwrap(), other);
    assert!(store.get(&RecordId::from("some-other-id")).is_none());
}

#[test]
fn update_unknown_id_is_a_silent_no_op() {
    let tracker = setup();
    let store = tracker.expenses();
    let e = expense("2024-01-05", "100", "Food");
    store.add(e.clone()).unwrap();

    let rx = tracker.store().subscribe();
    let found = store
        .update(&RecordId::from("nope"), expense("2024-01-01", "1", "Other"))
        .unwrap();
    assert!(!found);
    assert_eq!(store.get_all(), vec![e]);
    assert!(rx.try_recv().is_err());
}

#[test]
fn delete_removes_only_the_matching_record() {
    let tracker = setup();
    let store = tracker.expenses();
    let a = expense("2024-01-05", "1", "Food");
    let b = expense("2024-01-06", "2", "Food");
    store.add(a.clone()).unwrap();
    store.add(b.clone()).unwrap();

    assert!(store.delete(&a.id).unwrap());
    assert_eq!(store.get_all(), vec![b.clone()]);
    assert!(!store.delete(&a.id).unwrap());
    assert_eq!(store.get_all(), vec![b]);
}

#[test]
fn resolve_accepts_unambiguous_prefixes() {
    let tracker = setup();
    let store = tracker.expenses();
    let mut a = expense("2024-01-05", "1", "Food");
    a.id = RecordId::from("abc-111");
    let mut b = expense("2024-01-06", "2", "Food");
    b.id = RecordId::from("abd-222");
    store.add(a).unwrap();
    store.add(b).unwrap();

    assert_eq!(store.resolve("abc").unwrap().as_str(), "abc-111");
    assert_eq!(store.resolve("abd-222").unwrap().as_str(), "abd-222");
    let err = store.resolve("ab").unwrap_err();
    assert!(err.to_string().contains("ambiguous"));
    assert!(store.resolve("zzz").is_err());
}

#[test]
fn reads_records_written_with_numeric_ids() {
    let tracker = setup();
    tracker
        .store()
        .conn()
        .execute(
            "INSERT INTO kv(owner, key, value) VALUES ('local', ?1, ?2)",
            [
                StoreKey::Goals.as_str(),
                r#"[{"id":1706745600000,"name":"Vacation","targetAmount":1500,"currentAmount":1800.5,"deadline":"2024-12-31"}]"#,
            ],
        )
        .unwrap();
    let goals: Vec<Goal> = RecordStore::<Goal>::new(tracker.store()).get_all();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id.as_str(), "1706745600000");
    assert_eq!(goals[0].target_amount, dec("1500"));
    assert_eq!(goals[0].current_amount, dec("1800.5"));
}

#[test]
fn persisted_json_uses_camel_case_fields() {
    let tracker = setup();
    tracker
        .expenses()
        .add(expense("2024-01-05", "12.30", "Food"))
        .unwrap();
    let raw: String = tracker
        .store()
        .conn()
        .query_row(
            "SELECT value FROM kv WHERE key=?1",
            [StoreKey::Expenses.as_str()],
            |r| r.get(0),
        )
        .unwrap();
    assert!(raw.contains("\"paymentMethod\":\"Cash\""));
    assert!(raw.contains("\"date\":\"2024-01-05\""));
    let back: Vec<Expense> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back[0].amount, dec("12.30"));
}

#[test]
fn settings_default_until_saved() {
    let tracker = setup();
    assert_eq!(tracker.settings().get(), Settings::default());
    let s = Settings {
        currency: "₱".into(),
        email: "me@example.com".into(),
        theme: Theme::Dark,
    };
    tracker.settings().save(&s).unwrap();
    assert_eq!(tracker.settings().get(), s);
}
