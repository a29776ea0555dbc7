// SPDX-License-Identifier: MIT
//! Journaling — per-user entry collections with demo seeding, newest first.

pub mod model;
pub mod seed;

pub use model::{JournalEntry, JournalPatch, NewJournalEntry};

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::storage::{KvStore, ReadState};

/// Per-user storage key prefix; the user id completes the key.
pub const JOURNAL_KEY_PREFIX: &str = "moodspace_journal_";

/// Errors surfaced by journal operations.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal entry content must not be empty")]
    EmptyContent,
}

// ─── JournalStore ─────────────────────────────────────────────────────────────

/// Journal persistence, one collection per user id.
#[derive(Clone)]
pub struct JournalStore {
    kv: Arc<KvStore>,
    seed_demo: bool,
}

impl JournalStore {
    pub fn new(kv: Arc<KvStore>, seed_demo: bool) -> Self {
        Self { kv, seed_demo }
    }

    fn key(user: &str) -> String {
        format!("{JOURNAL_KEY_PREFIX}{user}")
    }

    /// Load a user's entries, newest first.
    ///
    /// The first-ever load seeds the demo set and persists it, so repeated
    /// loads return the same data rather than regenerating it. An unreadable
    /// collection degrades to empty without seeding.
    pub async fn load(&self, user: &str) -> Vec<JournalEntry> {
        let key = Self::key(user);
        match self.kv.read(&key).await {
            ReadState::Found(entries) => entries,
            ReadState::Missing => {
                if !self.seed_demo {
                    return Vec::new();
                }
                let samples = seed::demo_entries(Utc::now());
                self.kv.write(&key, &samples).await;
                samples
            }
            ReadState::Invalid => Vec::new(),
        }
    }

    /// Validate and store a new entry at the head of the collection.
    pub async fn save(
        &self,
        draft: NewJournalEntry,
        user: &str,
    ) -> Result<JournalEntry, JournalError> {
        if draft.content.trim().is_empty() {
            return Err(JournalError::EmptyContent);
        }
        let existing = self.load(user).await;
        let entry = JournalEntry {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            content: draft.content,
            mood: draft.mood,
            tags: draft.tags,
            timestamp: draft
                .timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            ai_prompt: draft.ai_prompt,
        };
        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(entry.clone());
        updated.extend(existing);
        self.kv.write(&Self::key(user), &updated).await;
        Ok(entry)
    }

    /// Merge `patch` into the entry with `id` and refresh its timestamp.
    /// Returns `None` when no entry matches.
    pub async fn update(
        &self,
        id: &str,
        patch: JournalPatch,
        user: &str,
    ) -> Option<JournalEntry> {
        let mut entries = self.load(user).await;
        let mut updated = None;
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
            if let Some(content) = patch.content {
                entry.content = content;
            }
            if let Some(mood) = patch.mood {
                entry.mood = mood;
            }
            if let Some(tags) = patch.tags {
                entry.tags = tags;
            }
            if let Some(ai_prompt) = patch.ai_prompt {
                entry.ai_prompt = ai_prompt;
            }
            entry.timestamp = Utc::now().to_rfc3339();
            updated = Some(entry.clone());
        }
        self.kv.write(&Self::key(user), &entries).await;
        updated
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub async fn delete(&self, id: &str, user: &str) -> bool {
        let mut entries = self.load(user).await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() != before;
        self.kv.write(&Self::key(user), &entries).await;
        removed
    }
}
