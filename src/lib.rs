pub mod checkin;
pub mod config;
pub mod forum;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod prompts;
pub mod session;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;

use checkin::CheckinStore;
use config::AppConfig;
use forum::ForumStore;
use journal::JournalStore;
use session::SessionStore;
use storage::KvStore;

/// Shared application state passed to every command handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// The underlying key-value adapter. Stores hold their own handle; this
    /// one is for callers that need raw access (diagnostics, tests).
    pub kv: Arc<KvStore>,
    pub checkins: CheckinStore,
    pub journal: JournalStore,
    pub forum: ForumStore,
    pub session: SessionStore,
}

impl AppContext {
    /// Open the store under the configured data dir and wire up every store.
    pub async fn init(config: AppConfig) -> Result<Self> {
        let kv = Arc::new(
            KvStore::open_with_slow_query(&config.data_dir, config.observability.slow_query_ms)
                .await?,
        );
        Ok(Self::with_kv(config, kv))
    }

    /// Wire the stores over an existing adapter. Tests pass an in-memory one.
    pub fn with_kv(config: AppConfig, kv: Arc<KvStore>) -> Self {
        let config = Arc::new(config);
        Self {
            checkins: CheckinStore::new(kv.clone()),
            journal: JournalStore::new(kv.clone(), config.demo.seed_content),
            forum: ForumStore::new(kv.clone(), config.demo.seed_content),
            session: SessionStore::new(kv.clone(), config.guest_user_id.clone()),
            config,
            kv,
        }
    }
}
