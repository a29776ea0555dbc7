// SPDX-License-Identifier: MIT
//! Community forum — one global post collection with likes, nested replies,
//! and anonymized author identity.
//!
//! Ordering is by insertion (new posts are prepended, replies appended),
//! never by timestamp comparison.

pub mod model;
pub mod seed;

pub use model::{LikeOutcome, NewPost, Post, Reply, ANONYMOUS_AUTHOR};

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::storage::{KvStore, ReadState};
use model::{PostRecord, ReplyRecord};

/// Storage key holding the global post collection.
pub const FORUM_POSTS_KEY: &str = "moodspace_forum_posts";

/// Errors surfaced by forum operations.
#[derive(Debug, thiserror::Error)]
pub enum ForumError {
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("post content must not be empty")]
    EmptyContent,
}

// ─── ForumStore ───────────────────────────────────────────────────────────────

/// Forum persistence over the shared key-value store.
#[derive(Clone)]
pub struct ForumStore {
    kv: Arc<KvStore>,
    seed_demo: bool,
}

impl ForumStore {
    pub fn new(kv: Arc<KvStore>, seed_demo: bool) -> Self {
        Self { kv, seed_demo }
    }

    async fn load_records(&self) -> Vec<PostRecord> {
        match self.kv.read(FORUM_POSTS_KEY).await {
            ReadState::Found(posts) => posts,
            ReadState::Missing => {
                if !self.seed_demo {
                    return Vec::new();
                }
                let samples = seed::demo_posts(Utc::now());
                self.kv.write(FORUM_POSTS_KEY, &samples).await;
                samples
            }
            ReadState::Invalid => Vec::new(),
        }
    }

    /// Every post, newest first, anonymized.
    pub async fn load_posts(&self) -> Vec<Post> {
        self.load_records().await.iter().map(Post::from).collect()
    }

    /// Validate and store a new post at the head of the collection. The
    /// caller's id lands in the private moderation field of the stored
    /// record; the returned view never carries it.
    pub async fn create_post(&self, draft: NewPost, user: &str) -> Result<Post, ForumError> {
        if draft.content.trim().is_empty() {
            return Err(ForumError::EmptyContent);
        }
        let mut posts = self.load_records().await;
        let record = PostRecord {
            id: Uuid::new_v4().to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: draft.content,
            mood: draft.mood,
            tag: draft.tag,
            likes: 0,
            liked_by: Vec::new(),
            replies: Vec::new(),
            timestamp: Utc::now().to_rfc3339(),
            trigger_warning: draft.trigger_warning,
            moderation_user_id: Some(user.to_string()),
        };
        let view = Post::from(&record);
        posts.insert(0, record);
        self.kv.write(FORUM_POSTS_KEY, &posts).await;
        Ok(view)
    }

    /// Toggle `user`'s like on a post. The like count floors at zero.
    pub async fn like_post(&self, post_id: &str, user: &str) -> Result<LikeOutcome, ForumError> {
        let mut posts = self.load_records().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| ForumError::PostNotFound(post_id.to_string()))?;

        let outcome = if let Some(pos) = post.liked_by.iter().position(|id| id == user) {
            post.liked_by.remove(pos);
            post.likes = post.likes.saturating_sub(1);
            LikeOutcome {
                liked: false,
                likes: post.likes,
            }
        } else {
            post.liked_by.push(user.to_string());
            post.likes += 1;
            LikeOutcome {
                liked: true,
                likes: post.likes,
            }
        };
        self.kv.write(FORUM_POSTS_KEY, &posts).await;
        Ok(outcome)
    }

    /// Append a reply to a post and return its anonymized view.
    pub async fn reply_to_post(
        &self,
        post_id: &str,
        content: &str,
        user: &str,
    ) -> Result<Reply, ForumError> {
        if content.trim().is_empty() {
            return Err(ForumError::EmptyContent);
        }
        let mut posts = self.load_records().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| ForumError::PostNotFound(post_id.to_string()))?;

        let record = ReplyRecord {
            id: Uuid::new_v4().to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            content: content.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            moderation_user_id: Some(user.to_string()),
        };
        let view = Reply::from(&record);
        post.replies.push(record);
        self.kv.write(FORUM_POSTS_KEY, &posts).await;
        Ok(view)
    }

    /// Record a report. There is no moderation queue in this tier, so the
    /// report is a structured log line only; it always succeeds.
    pub async fn report_post(&self, post_id: &str, reason: &str, user: &str) {
        info!(post_id, reason, user, "forum post reported");
    }

    /// Ids of the posts `user` has liked, in collection order.
    pub async fn user_liked_post_ids(&self, user: &str) -> Vec<String> {
        self.load_records()
            .await
            .into_iter()
            .filter(|post| post.liked_by.iter().any(|id| id == user))
            .map(|post| post.id)
            .collect()
    }
}
