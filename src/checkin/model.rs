// SPDX-License-Identifier: MIT
//! Check-in data model — records in the exact shape the persisted JSON uses.

use serde::{Deserialize, Serialize};

/// One recorded mood/energy/reflection entry.
///
/// Immutable once saved: the owning collection is only appended to or
/// replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinEntry {
    pub id: String,
    /// References a `MoodDefinition` id from the mood catalog.
    pub mood_id: String,
    /// Energy slider value, 1–5.
    pub energy: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// The reflection prompt on screen when the entry was saved.
    #[serde(default)]
    pub prompt: String,
    /// Micro-action suggestions surfaced alongside the check-in.
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    /// ISO 8601 timestamp.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_field_names_are_camel_case() {
        let entry = CheckinEntry {
            id: "c1".to_string(),
            mood_id: "radiant".to_string(),
            energy: 4,
            tags: vec!["rest".to_string()],
            notes: String::new(),
            prompt: "What went right today?".to_string(),
            suggested_actions: vec!["Take a walk.".to_string()],
            date: "2026-08-01T09:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("moodId").is_some());
        assert!(json.get("suggestedActions").is_some());
        assert!(json.get("mood_id").is_none());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"{"id":"c2","moodId":"steady","energy":3,"date":"2026-08-01T09:00:00Z"}"#;
        let entry: CheckinEntry = serde_json::from_str(raw).unwrap();
        assert!(entry.tags.is_empty());
        assert!(entry.notes.is_empty());
        assert!(entry.suggested_actions.is_empty());
    }

    #[test]
    fn json_round_trip() {
        let entry = CheckinEntry {
            id: "c3".to_string(),
            mood_id: "tender".to_string(),
            energy: 2,
            tags: vec!["quiet".to_string(), "home".to_string()],
            notes: "slow morning".to_string(),
            prompt: String::new(),
            suggested_actions: Vec::new(),
            date: "2026-08-02T21:30:00Z".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CheckinEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
