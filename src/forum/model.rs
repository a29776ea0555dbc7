// SPDX-License-Identifier: MIT
//! Forum data model — stored records and the anonymized views the public
//! API returns.
//!
//! Stored records carry a private moderation field (the true author id).
//! That field must never cross the API boundary: every caller-facing type in
//! this module is a view with the field structurally absent, not stripped ad
//! hoc at call sites.

use serde::{Deserialize, Serialize};

/// Display author for every post and reply.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";

// ─── Stored records ───────────────────────────────────────────────────────────

/// A forum post as persisted. Internal to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub author: String,
    pub content: String,
    /// Emoji the author picked as the post's avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Category tag used by the feed filter, e.g. `"Support"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub replies: Vec<ReplyRecord>,
    pub timestamp: String,
    #[serde(default)]
    pub trigger_warning: bool,
    /// Author identity retained for moderation only. Absent on seeded
    /// content.
    #[serde(
        rename = "_moderationUserId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub moderation_user_id: Option<String>,
}

/// A reply as persisted, nested in its post. Internal to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRecord {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    #[serde(
        rename = "_moderationUserId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub moderation_user_id: Option<String>,
}

// ─── Views ────────────────────────────────────────────────────────────────────

/// Reader-facing post view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub content: String,
    pub mood: Option<String>,
    pub tag: Option<String>,
    pub likes: u32,
    pub liked_by: Vec<String>,
    pub replies: Vec<Reply>,
    pub timestamp: String,
    pub trigger_warning: bool,
}

/// Reader-facing reply view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

impl From<&PostRecord> for Post {
    fn from(record: &PostRecord) -> Self {
        Self {
            id: record.id.clone(),
            author: record.author.clone(),
            content: record.content.clone(),
            mood: record.mood.clone(),
            tag: record.tag.clone(),
            likes: record.likes,
            liked_by: record.liked_by.clone(),
            replies: record.replies.iter().map(Reply::from).collect(),
            timestamp: record.timestamp.clone(),
            trigger_warning: record.trigger_warning,
        }
    }
}

impl From<&ReplyRecord> for Reply {
    fn from(record: &ReplyRecord) -> Self {
        Self {
            id: record.id.clone(),
            author: record.author.clone(),
            content: record.content.clone(),
            timestamp: record.timestamp.clone(),
        }
    }
}

// ─── Inputs / outcomes ────────────────────────────────────────────────────────

/// Fields accepted when creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: String,
    /// Emoji avatar for the post.
    pub mood: Option<String>,
    /// Category tag, e.g. `"Support"`.
    pub tag: Option<String>,
    pub trigger_warning: bool,
}

/// Result of toggling a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeOutcome {
    /// Whether the user likes the post after the toggle.
    pub liked: bool,
    /// The post's like count after the toggle.
    pub likes: u32,
}
