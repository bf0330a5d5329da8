use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use smiletrack_common::clock::FixedClock;
use smiletrack_leaderboard::LeaderboardStore;

fn store_on(dir: &std::path::Path, day: u32) -> LeaderboardStore {
    let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
    let clock = FixedClock::at(date, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    LeaderboardStore::with_clock(dir, Arc::new(clock))
}

#[test]
fn same_day_submissions_rank_by_score() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_on(dir.path(), 10);

    store.submit("Alice", 25).unwrap();
    store.submit("Bob", 28).unwrap();

    let ranked = store.list_ranked().unwrap();
    let summary: Vec<_> = ranked
        .iter()
        .map(|r| (r.name.as_str(), r.smile_count))
        .collect();
    assert_eq!(summary, vec![("Bob", 28), ("Alice", 25)]);
}

#[test]
fn resubmitting_same_day_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_on(dir.path(), 10);

    store.submit("Alice", 12).unwrap();
    store.submit("Alice", 19).unwrap();

    let ranked = store.list_ranked().unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].smile_count, 19);
}

#[test]
fn different_days_are_separate_entries_and_earlier_wins_ties() {
    let dir = tempfile::tempdir().unwrap();
    store_on(dir.path(), 12).submit("Alice", 20).unwrap();
    store_on(dir.path(), 3).submit("Alice", 20).unwrap();

    let ranked = store_on(dir.path(), 12).list_ranked().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].date, NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());
    assert_eq!(ranked[1].date, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
}

#[test]
fn corrupted_entry_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_on(dir.path(), 10);

    store.submit("Alice", 25).unwrap();
    store.submit("Bob", 28).unwrap();
    std::fs::write(dir.path().join("Mallory_2025-05-10.json"), "{\"name\": ").unwrap();
    std::fs::write(
        dir.path().join("Wrong_2025-05-10.json"),
        r#"{"name": "Wrong", "smile_count": "lots", "date": "2025-05-10"}"#,
    )
    .unwrap();

    let ranked = store.list_ranked().unwrap();
    let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
}

proptest! {
    #[test]
    fn submitted_entry_is_listed(name in "[A-Za-z][A-Za-z0-9 ]{0,15}", score in 0u32..=30) {
        let dir = tempfile::tempdir().unwrap();
        let store = store_on(dir.path(), 10);

        store.submit(&name, score).unwrap();

        let ranked = store.list_ranked().unwrap();
        prop_assert!(ranked.iter().any(|r| r.name == name && r.smile_count == score));
    }
}
