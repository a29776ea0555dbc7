// SPDX-License-Identifier: MIT
//! Session store — the locally persisted user record and the identity every
//! per-user collection is partitioned by.
//!
//! There is no real authentication in this tier: "login" mints a local
//! record from an email address. Anonymous sessions all resolve to the
//! configured guest id, so two different people using the same machine
//! without signing in share one bucket; set `guest_user_id` in config.toml
//! to repartition.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::KvStore;

/// Storage key holding the current session's user record.
pub const AUTH_STORAGE_KEY: &str = "moodspace_auth_user";

/// The locally persisted user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    /// ISO 8601 timestamp of first sign-in.
    pub created_at: String,
}

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("an email address is required to sign in")]
    InvalidEmail,
}

// ─── SessionStore ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<KvStore>,
    guest_user_id: String,
}

impl SessionStore {
    pub fn new(kv: Arc<KvStore>, guest_user_id: impl Into<String>) -> Self {
        Self {
            kv,
            guest_user_id: guest_user_id.into(),
        }
    }

    /// Mint and persist a local user record. The display name falls back to
    /// the email's local part, then to `"Guest"`.
    pub async fn login(&self, email: &str, name: Option<&str>) -> Result<AuthUser, AuthError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AuthError::InvalidEmail);
        }
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .or_else(|| {
                email
                    .split('@')
                    .next()
                    .filter(|part| !part.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Guest".to_string());

        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            created_at: Utc::now().to_rfc3339(),
        };
        self.kv.write(AUTH_STORAGE_KEY, &user).await;
        Ok(user)
    }

    /// The stored user record, if any (malformed records read as none).
    pub async fn current(&self) -> Option<AuthUser> {
        self.kv.read(AUTH_STORAGE_KEY).await.into_option()
    }

    /// Drop the stored user record.
    pub async fn logout(&self) {
        self.kv.remove(AUTH_STORAGE_KEY).await;
    }

    /// The id that partitions per-user collections: the signed-in user's id,
    /// or the guest fallback for anonymous sessions.
    pub async fn active_user_id(&self) -> String {
        match self.current().await {
            Some(user) => user.id,
            None => self.guest_user_id.clone(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SessionStore {
        let kv = Arc::new(KvStore::in_memory().await.unwrap());
        SessionStore::new(kv, "default")
    }

    #[tokio::test]
    async fn login_normalizes_email_and_derives_name() {
        let sessions = store().await;
        let user = sessions.login("  Riley@Example.COM ", None).await.unwrap();
        assert_eq!(user.email, "riley@example.com");
        assert_eq!(user.name, "riley");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn explicit_name_wins_over_the_email_local_part() {
        let sessions = store().await;
        let user = sessions
            .login("riley@example.com", Some("  Riley R. "))
            .await
            .unwrap();
        assert_eq!(user.name, "Riley R.");
    }

    #[tokio::test]
    async fn empty_email_is_rejected_before_any_write() {
        let sessions = store().await;
        assert!(matches!(
            sessions.login("   ", None).await,
            Err(AuthError::InvalidEmail)
        ));
        assert!(sessions.current().await.is_none());
    }

    #[tokio::test]
    async fn login_persists_and_logout_clears() {
        let sessions = store().await;
        let user = sessions.login("a@b.c", None).await.unwrap();
        assert_eq!(sessions.current().await, Some(user.clone()));
        assert_eq!(sessions.active_user_id().await, user.id);

        sessions.logout().await;
        assert!(sessions.current().await.is_none());
        assert_eq!(sessions.active_user_id().await, "default");
    }

    #[tokio::test]
    async fn degenerate_email_local_part_falls_back_to_guest() {
        let sessions = store().await;
        let user = sessions.login("@example.com", None).await.unwrap();
        assert_eq!(user.name, "Guest");
    }
}
