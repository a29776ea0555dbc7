// SPDX-License-Identifier: MIT
//! Mood check-ins — per-user entry collections under a single storage key,
//! with a migration path for the legacy single-array schema.

pub mod model;

pub use model::CheckinEntry;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{KvStore, ReadState};

/// Storage key holding every user's check-in collection.
pub const CHECKIN_STORAGE_KEY: &str = "moodspace_checkins";

/// Bucket name the pre-per-user schema is migrated under.
pub const LEGACY_BUCKET: &str = "__legacy__";

/// On-disk shape of the check-in key: either the current per-user map or the
/// legacy bare array written before accounts existed. Anything else parses as
/// neither and the store is treated as empty.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CheckinFile {
    Buckets(BTreeMap<String, Vec<CheckinEntry>>),
    Legacy(Vec<CheckinEntry>),
}

// ─── CheckinStore ─────────────────────────────────────────────────────────────

/// Check-in persistence, partitioned by user id.
#[derive(Clone)]
pub struct CheckinStore {
    kv: Arc<KvStore>,
}

impl CheckinStore {
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    async fn load_buckets(&self) -> BTreeMap<String, Vec<CheckinEntry>> {
        match self.kv.read::<CheckinFile>(CHECKIN_STORAGE_KEY).await {
            ReadState::Found(CheckinFile::Buckets(buckets)) => buckets,
            ReadState::Found(CheckinFile::Legacy(entries)) => {
                let mut buckets = BTreeMap::new();
                buckets.insert(LEGACY_BUCKET.to_string(), entries);
                buckets
            }
            ReadState::Missing | ReadState::Invalid => BTreeMap::new(),
        }
    }

    /// Load one user's entries, oldest first. `None` addresses the legacy
    /// bucket written before check-ins were partitioned per user.
    pub async fn load(&self, user: Option<&str>) -> Vec<CheckinEntry> {
        let mut buckets = self.load_buckets().await;
        buckets
            .remove(user.unwrap_or(LEGACY_BUCKET))
            .unwrap_or_default()
    }

    /// Replace the user's entire collection (no merge). Dropping the legacy
    /// bucket here completes the one-time schema migration. No-op when
    /// `user` is empty.
    pub async fn persist(&self, user: &str, entries: &[CheckinEntry]) {
        if user.is_empty() {
            return;
        }
        let mut buckets = self.load_buckets().await;
        buckets.insert(user.to_string(), entries.to_vec());
        buckets.remove(LEGACY_BUCKET);
        self.kv.write(CHECKIN_STORAGE_KEY, &buckets).await;
    }

    /// Delete one user's entries, or the whole storage key with `None`.
    /// When the last user's bucket goes, the key goes with it.
    pub async fn clear(&self, user: Option<&str>) {
        let Some(user) = user else {
            self.kv.remove(CHECKIN_STORAGE_KEY).await;
            return;
        };
        let mut buckets = self.load_buckets().await;
        if buckets.remove(user).is_none() {
            return;
        }
        if buckets.keys().any(|bucket| bucket != LEGACY_BUCKET) {
            self.kv.write(CHECKIN_STORAGE_KEY, &buckets).await;
        } else {
            self.kv.remove(CHECKIN_STORAGE_KEY).await;
        }
    }
}
