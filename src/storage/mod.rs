//! JSON key-value persistence — the single storage boundary every store goes
//! through.
//!
//! Values are JSON text under named keys in one SQLite table, one key per
//! collection. The adapter never surfaces failures to callers: reads degrade
//! to [`ReadState::Invalid`] and writes are best-effort (logged and dropped
//! on failure). Callers that need to distinguish "nothing stored yet" from
//! "stored but unreadable" — the seeding stores do — branch on the tagged
//! [`ReadState`].

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

// ─── ReadState ────────────────────────────────────────────────────────────────

/// Tagged outcome of a read.
///
/// `Missing` means the key has never been written (first-time stores may seed
/// demo content). `Invalid` means something is stored but could not be read
/// back — a query failure or JSON that no longer matches the expected shape —
/// and callers must degrade to empty without seeding, so a transient failure
/// never overwrites data that may still be recoverable.
#[derive(Debug)]
pub enum ReadState<T> {
    Found(T),
    Missing,
    Invalid,
}

impl<T> ReadState<T> {
    /// The contained value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            ReadState::Found(value) => Some(value),
            ReadState::Missing | ReadState::Invalid => None,
        }
    }

    /// Collapse to the contained value or the type's default.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }
}

// ─── KvStore ──────────────────────────────────────────────────────────────────

/// The key-value store adapter. Cloning is cheap (the pool is Arc-backed);
/// stores receive it as `Arc<KvStore>` at construction.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    /// Open (or create) the store at `{data_dir}/moodspace.db`.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        Self::open_with_slow_query(data_dir, 0).await
    }

    /// Open with slow-statement logging enabled.
    ///
    /// `slow_query_ms` is the threshold in milliseconds — statements exceeding
    /// it are logged at WARN level. Set to 0 to disable.
    pub async fn open_with_slow_query(data_dir: &Path, slow_query_ms: u64) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
        let db_path = data_dir.join("moodspace.db");
        let mut opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        if slow_query_ms > 0 {
            opts = sqlx::ConnectOptions::log_slow_statements(
                opts,
                log::LevelFilter::Warn,
                std::time::Duration::from_millis(slow_query_ms),
            );
        }

        let pool = SqlitePool::connect_with(opts).await?;
        Self::bootstrap(&pool).await?;
        Ok(Self { pool })
    }

    /// An in-memory store for tests — same contract, nothing touches disk.
    ///
    /// The pool is capped at a single connection: every connection to a
    /// `:memory:` SQLite database gets its own private database.
    pub async fn in_memory() -> Result<Self> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;
        Self::bootstrap(&pool).await?;
        Ok(Self { pool })
    }

    async fn bootstrap(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(pool)
        .await
        .context("create kv table")?;
        Ok(())
    }

    /// Read and parse the value under `key`.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> ReadState<T> {
        let row: std::result::Result<Option<(String,)>, sqlx::Error> =
            sqlx::query_as("SELECT value FROM kv WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await;
        match row {
            Ok(Some((raw,))) => match serde_json::from_str(&raw) {
                Ok(value) => ReadState::Found(value),
                Err(err) => {
                    warn!(key, %err, "stored value does not match the expected shape");
                    ReadState::Invalid
                }
            },
            Ok(None) => ReadState::Missing,
            Err(err) => {
                warn!(key, %err, "failed to read stored value");
                ReadState::Invalid
            }
        }
    }

    /// Serialize `value` as JSON and upsert it under `key`. Best-effort: a
    /// serialization or query failure is logged and dropped.
    pub async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, %err, "failed to serialize value — write dropped");
                return;
            }
        };
        let outcome = sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(raw)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await;
        if let Err(err) = outcome {
            warn!(key, %err, "failed to persist value — write dropped");
        }
    }

    /// Delete the value under `key`. Best-effort.
    pub async fn remove(&self, key: &str) {
        let outcome = sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await;
        if let Err(err) = outcome {
            warn!(key, %err, "failed to remove stored value");
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_missing() {
        let kv = KvStore::in_memory().await.unwrap();
        let state: ReadState<Vec<String>> = kv.read("nothing-here").await;
        assert!(matches!(state, ReadState::Missing));
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let kv = KvStore::in_memory().await.unwrap();
        let value = vec!["a".to_string(), "b".to_string()];
        kv.write("list", &value).await;
        let state: ReadState<Vec<String>> = kv.read("list").await;
        match state {
            ReadState::Found(back) => assert_eq!(back, value),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rewrites_replace_the_value() {
        let kv = KvStore::in_memory().await.unwrap();
        kv.write("n", &1u32).await;
        kv.write("n", &2u32).await;
        let state: ReadState<u32> = kv.read("n").await;
        assert!(matches!(state, ReadState::Found(2)));
    }

    #[tokio::test]
    async fn shape_mismatch_reads_as_invalid() {
        let kv = KvStore::in_memory().await.unwrap();
        kv.write("scalar", &42u32).await;
        let state: ReadState<Vec<String>> = kv.read("scalar").await;
        assert!(matches!(state, ReadState::Invalid));
    }

    #[tokio::test]
    async fn corrupt_json_reads_as_invalid() {
        let kv = KvStore::in_memory().await.unwrap();
        sqlx::query("INSERT INTO kv (key, value, updated_at) VALUES ('bad', '{not json', '')")
            .execute(&kv.pool)
            .await
            .unwrap();
        let state: ReadState<serde_json::Value> = kv.read("bad").await;
        assert!(matches!(state, ReadState::Invalid));
    }

    #[tokio::test]
    async fn remove_deletes_the_key() {
        let kv = KvStore::in_memory().await.unwrap();
        kv.write("gone", &"soon").await;
        kv.remove("gone").await;
        let state: ReadState<String> = kv.read("gone").await;
        assert!(matches!(state, ReadState::Missing));
    }
}
