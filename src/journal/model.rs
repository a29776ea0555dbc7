// SPDX-License-Identifier: MIT
//! Journal data model.

use serde::{Deserialize, Serialize};

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    /// Emoji the entry was tagged with, e.g. `"😊"`.
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO 8601 timestamp; refreshed on every update.
    pub timestamp: String,
    /// The reflection prompt that seeded the entry, if any.
    #[serde(default)]
    pub ai_prompt: String,
}

/// Fields accepted when creating an entry. An absent id or timestamp is
/// assigned at save time.
#[derive(Debug, Clone, Default)]
pub struct NewJournalEntry {
    pub id: Option<String>,
    pub content: String,
    pub mood: String,
    pub tags: Vec<String>,
    pub timestamp: Option<String>,
    pub ai_prompt: String,
}

/// Partial update merged into an existing entry.
#[derive(Debug, Clone, Default)]
pub struct JournalPatch {
    pub content: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ai_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_prompt_persists_camel_case() {
        let entry = JournalEntry {
            id: "j1".to_string(),
            content: "wrote a little".to_string(),
            mood: "🙂".to_string(),
            tags: Vec::new(),
            timestamp: "2026-08-01T08:00:00Z".to_string(),
            ai_prompt: "What went well today?".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["aiPrompt"], "What went well today?");
    }

    #[test]
    fn absent_optionals_default() {
        let raw = r#"{"id":"j2","content":"hi","timestamp":"2026-08-01T08:00:00Z"}"#;
        let entry: JournalEntry = serde_json::from_str(raw).unwrap();
        assert!(entry.mood.is_empty());
        assert!(entry.tags.is_empty());
        assert!(entry.ai_prompt.is_empty());
    }
}
