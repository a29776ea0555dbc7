//! Integration tests for the check-in store: the persist/load round-trip
//! law, the legacy single-array migration, and clear semantics.

use std::sync::Arc;

use moodspace::checkin::{CheckinEntry, CheckinStore, CHECKIN_STORAGE_KEY};
use moodspace::storage::{KvStore, ReadState};
use tempfile::TempDir;

async fn make_store() -> CheckinStore {
    let kv = Arc::new(KvStore::in_memory().await.unwrap());
    CheckinStore::new(kv)
}

fn entry(id: &str, mood_id: &str, date: &str) -> CheckinEntry {
    CheckinEntry {
        id: id.to_string(),
        mood_id: mood_id.to_string(),
        energy: 3,
        tags: vec!["evening".to_string()],
        notes: "wrote this from the couch".to_string(),
        prompt: "Name one quiet win that deserves to be seen.".to_string(),
        suggested_actions: vec!["Plan a five-minute pause to check in again later tonight.".to_string()],
        date: format!("{date}T20:00:00+00:00"),
    }
}

#[tokio::test]
async fn persist_then_load_round_trips() {
    let store = make_store().await;
    let entries = vec![
        entry("c1", "steady", "2026-08-04"),
        entry("c2", "radiant", "2026-08-05"),
    ];
    store.persist("user-1", &entries).await;
    assert_eq!(store.load(Some("user-1")).await, entries);
}

#[tokio::test]
async fn collections_are_partitioned_per_user() {
    let store = make_store().await;
    let mine = vec![entry("c1", "steady", "2026-08-05")];
    let theirs = vec![entry("c2", "stormy", "2026-08-05")];
    store.persist("user-1", &mine).await;
    store.persist("user-2", &theirs).await;
    assert_eq!(store.load(Some("user-1")).await, mine);
    assert_eq!(store.load(Some("user-2")).await, theirs);
    assert!(store.load(Some("user-3")).await.is_empty());
}

#[tokio::test]
async fn persist_replaces_the_whole_collection() {
    let store = make_store().await;
    store
        .persist("user-1", &[entry("c1", "steady", "2026-08-04")])
        .await;
    let replacement = vec![entry("c9", "numb", "2026-08-06")];
    store.persist("user-1", &replacement).await;
    assert_eq!(store.load(Some("user-1")).await, replacement);
}

#[tokio::test]
async fn empty_user_id_is_a_no_op() {
    let store = make_store().await;
    store.persist("", &[entry("c1", "steady", "2026-08-05")]).await;
    assert!(store.load(None).await.is_empty());
    assert!(store.load(Some("")).await.is_empty());
}

#[tokio::test]
async fn legacy_bare_array_is_readable_without_a_user() {
    let kv = Arc::new(KvStore::in_memory().await.unwrap());
    let legacy = vec![entry("old-1", "tender", "2026-07-30")];
    // The pre-per-user schema stored a bare array under the key.
    kv.write(CHECKIN_STORAGE_KEY, &legacy).await;

    let store = CheckinStore::new(kv);
    assert_eq!(store.load(None).await, legacy);
    assert!(store.load(Some("user-1")).await.is_empty());
}

#[tokio::test]
async fn persist_drops_the_legacy_bucket() {
    let kv = Arc::new(KvStore::in_memory().await.unwrap());
    kv.write(CHECKIN_STORAGE_KEY, &vec![entry("old-1", "tender", "2026-07-30")])
        .await;

    let store = CheckinStore::new(kv);
    store
        .persist("user-1", &[entry("c1", "steady", "2026-08-05")])
        .await;
    assert!(store.load(None).await.is_empty());
    assert_eq!(store.load(Some("user-1")).await.len(), 1);
}

#[tokio::test]
async fn clear_without_a_user_removes_the_key() {
    let store = make_store().await;
    store
        .persist("user-1", &[entry("c1", "steady", "2026-08-05")])
        .await;
    store.clear(None).await;
    assert!(store.load(Some("user-1")).await.is_empty());
}

#[tokio::test]
async fn clearing_the_last_user_removes_the_key_entirely() {
    let kv = Arc::new(KvStore::in_memory().await.unwrap());
    let store = CheckinStore::new(kv.clone());
    store
        .persist("user-1", &[entry("c1", "steady", "2026-08-05")])
        .await;
    store.clear(Some("user-1")).await;

    let state: ReadState<serde_json::Value> = kv.read(CHECKIN_STORAGE_KEY).await;
    assert!(matches!(state, ReadState::Missing));
}

#[tokio::test]
async fn clearing_one_user_keeps_the_others() {
    let store = make_store().await;
    store
        .persist("user-1", &[entry("c1", "steady", "2026-08-05")])
        .await;
    store
        .persist("user-2", &[entry("c2", "stormy", "2026-08-05")])
        .await;
    store.clear(Some("user-1")).await;
    assert!(store.load(Some("user-1")).await.is_empty());
    assert_eq!(store.load(Some("user-2")).await.len(), 1);
}

#[tokio::test]
async fn unreadable_store_degrades_to_empty() {
    let kv = Arc::new(KvStore::in_memory().await.unwrap());
    kv.write(CHECKIN_STORAGE_KEY, &"not a collection").await;

    let store = CheckinStore::new(kv);
    assert!(store.load(Some("user-1")).await.is_empty());
    assert!(store.load(None).await.is_empty());
}

#[tokio::test]
async fn collections_survive_a_store_reopen() {
    let dir = TempDir::new().unwrap();
    let entries = vec![entry("c1", "hopeful", "2026-08-05")];

    {
        let kv = Arc::new(KvStore::open(dir.path()).await.unwrap());
        CheckinStore::new(kv).persist("user-1", &entries).await;
    }

    let kv = Arc::new(KvStore::open(dir.path()).await.unwrap());
    let store = CheckinStore::new(kv);
    assert_eq!(store.load(Some("user-1")).await, entries);
}
