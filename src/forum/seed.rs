// SPDX-License-Identifier: MIT
//! Demo forum content seeded on first-ever load.

use chrono::{DateTime, Duration, Utc};

use super::model::{PostRecord, ReplyRecord, ANONYMOUS_AUTHOR};

fn reply(id: &str, content: &str, timestamp: String) -> ReplyRecord {
    ReplyRecord {
        id: id.to_string(),
        author: ANONYMOUS_AUTHOR.to_string(),
        content: content.to_string(),
        timestamp,
        moderation_user_id: None,
    }
}

/// The four sample posts shown to first-time visitors, dated relative to
/// `now`. Seeded content has no moderation field — there is no author to
/// protect.
pub fn demo_posts(now: DateTime<Utc>) -> Vec<PostRecord> {
    let hours_ago = |hours: i64| (now - Duration::hours(hours)).to_rfc3339();
    let minutes_ago = |minutes: i64| (now - Duration::minutes(minutes)).to_rfc3339();
    vec![
        PostRecord {
            id: "post-1".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: "Struggling with finals anxiety. Anyone else feeling overwhelmed? Would \
                      love to hear your coping strategies."
                .to_string(),
            mood: None,
            tag: None,
            likes: 45,
            liked_by: Vec::new(),
            replies: vec![
                reply(
                    "reply-1-1",
                    "I totally relate! What helps me is breaking study sessions into 25-minute \
                     chunks with 5-minute breaks. Also, remember to breathe!",
                    hours_ago(2),
                ),
                reply(
                    "reply-1-2",
                    "You're not alone. I find that talking to campus counseling really helped \
                     me. They're free and confidential!",
                    hours_ago(1),
                ),
            ],
            timestamp: hours_ago(5),
            trigger_warning: false,
            moderation_user_id: None,
        },
        PostRecord {
            id: "post-2".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: "Just wanted to say thank you to this community. You all helped me through \
                      a really rough week. Sometimes just knowing others understand makes all \
                      the difference. 💙"
                .to_string(),
            mood: None,
            tag: None,
            likes: 89,
            liked_by: Vec::new(),
            replies: vec![reply(
                "reply-2-1",
                "We're here for you! So glad you're feeling better.",
                hours_ago(3),
            )],
            timestamp: hours_ago(10),
            trigger_warning: false,
            moderation_user_id: None,
        },
        PostRecord {
            id: "post-3".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: "Does anyone else find it hard to ask for help? I know I should reach out \
                      but something always stops me."
                .to_string(),
            mood: None,
            tag: None,
            likes: 32,
            liked_by: Vec::new(),
            replies: vec![
                reply(
                    "reply-3-1",
                    "Yes! I struggle with this too. What helped me was starting small - texting \
                     a friend instead of calling, or emailing a professor instead of going to \
                     office hours at first.",
                    hours_ago(1),
                ),
                reply(
                    "reply-3-2",
                    "Remember: asking for help is a sign of strength, not weakness. Everyone \
                     needs support sometimes.",
                    minutes_ago(30),
                ),
            ],
            timestamp: hours_ago(15),
            trigger_warning: false,
            moderation_user_id: None,
        },
        PostRecord {
            id: "post-4".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: "Celebrating small wins today! Finally got out of bed before noon and took \
                      a shower. It might not seem like much, but it feels like a victory for me."
                .to_string(),
            mood: None,
            tag: None,
            likes: 67,
            liked_by: Vec::new(),
            replies: vec![
                reply(
                    "reply-4-1",
                    "Those ARE big wins! Be proud of yourself! 🎉",
                    hours_ago(1),
                ),
                reply(
                    "reply-4-2",
                    "Every step forward counts. You're doing amazing!",
                    minutes_ago(45),
                ),
            ],
            timestamp: hours_ago(20),
            trigger_warning: false,
            moderation_user_id: None,
        },
    ]
}
