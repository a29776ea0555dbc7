// SPDX-License-Identifier: MIT
//! Demo journal content seeded on a user's first-ever load.

use chrono::{DateTime, Duration, Utc};

use super::model::JournalEntry;

/// The four sample entries shown to first-time users, dated relative to
/// `now` so the journal looks recently lived-in.
pub fn demo_entries(now: DateTime<Utc>) -> Vec<JournalEntry> {
    let days_ago = |days: i64| (now - Duration::days(days)).to_rfc3339();
    vec![
        JournalEntry {
            id: "sample-1".to_string(),
            content: "Today was amazing! I finally finished that project I've been working on \
                      for weeks. The feeling of accomplishment is incredible. I also had a great \
                      conversation with an old friend - it reminded me how important it is to \
                      stay connected."
                .to_string(),
            mood: "😊".to_string(),
            tags: vec![
                "achievement".to_string(),
                "social".to_string(),
                "happy".to_string(),
            ],
            timestamp: days_ago(1),
            ai_prompt: "What made you feel accomplished today?".to_string(),
        },
        JournalEntry {
            id: "sample-2".to_string(),
            content: "Feeling a bit overwhelmed with all the assignments due next week. But I \
                      made a plan and broke everything down into smaller tasks. Taking it one \
                      step at a time. Also went for a walk which helped clear my head."
                .to_string(),
            mood: "😐".to_string(),
            tags: vec![
                "study".to_string(),
                "stress".to_string(),
                "movement".to_string(),
            ],
            timestamp: days_ago(3),
            ai_prompt: "What small step can you take today to feel more in control?".to_string(),
        },
        JournalEntry {
            id: "sample-3".to_string(),
            content: "Had a tough day. Didn't sleep well last night and it showed. But I'm \
                      grateful for my support system - talking things through with a friend \
                      really helped. Tomorrow is a new day."
                .to_string(),
            mood: "😟".to_string(),
            tags: vec![
                "tired".to_string(),
                "grateful".to_string(),
                "support".to_string(),
            ],
            timestamp: days_ago(5),
            ai_prompt: "What are you grateful for today, no matter how small?".to_string(),
        },
        JournalEntry {
            id: "sample-4".to_string(),
            content: "Celebrated a small win today! Got positive feedback on my presentation. \
                      It's nice to be recognized for hard work. Treating myself to my favorite \
                      meal tonight. Self-care is important!"
                .to_string(),
            mood: "😊".to_string(),
            tags: vec![
                "achievement".to_string(),
                "celebration".to_string(),
                "self-care".to_string(),
            ],
            timestamp: days_ago(7),
            ai_prompt: "How will you celebrate your wins today?".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_entries_newest_first() {
        let now = Utc::now();
        let entries = demo_entries(now);
        assert_eq!(entries.len(), 4);
        for pair in entries.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[test]
    fn sample_ids_are_stable() {
        let ids: Vec<String> = demo_entries(Utc::now()).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["sample-1", "sample-2", "sample-3", "sample-4"]);
    }
}
