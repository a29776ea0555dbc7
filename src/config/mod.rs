//! Configuration — CLI/env args layered over `{data_dir}/config.toml` over
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_GUEST_USER_ID: &str = "default";

// ─── DemoConfig ───────────────────────────────────────────────────────────────

/// Demo-content switches (`[demo]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed the journal and forum with sample content on first access.
    /// Default: true.
    pub seed_content: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { seed_content: true }
    }
}

// ─── ObservabilityConfig ──────────────────────────────────────────────────────

/// Observability knobs (`[observability]` in config.toml).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Statements slower than this many milliseconds are logged at WARN.
    /// 0 disables slow-statement logging.
    pub slow_query_ms: u64,
}

// ─── TOML override layer ──────────────────────────────────────────────────────

/// Shape of `{data_dir}/config.toml` — all fields are optional overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TomlConfig {
    log: Option<String>,
    log_format: Option<String>,
    guest_user_id: Option<String>,
    demo: Option<DemoConfig>,
    observability: Option<ObservabilityConfig>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── AppConfig ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Log filter (trace, debug, info, warn, error).
    pub log: String,
    /// Log output format: "pretty" (default) | "json".
    pub log_format: String,
    /// Identity bucket used when no user record is stored. Every anonymous
    /// session on a machine shares it — see the session module notes.
    pub guest_user_id: String,
    /// Demo-content switches.
    pub demo: DemoConfig,
    /// Slow-statement logging threshold.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(data_dir: Option<PathBuf>, log: Option<String>) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("MOODSPACE_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let guest_user_id = std::env::var("MOODSPACE_GUEST_USER_ID")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.guest_user_id)
            .unwrap_or_else(|| DEFAULT_GUEST_USER_ID.to_string());

        let demo = toml.demo.unwrap_or_default();
        let observability = toml.observability.unwrap_or_default();

        Self {
            data_dir,
            log,
            log_format,
            guest_user_id,
            demo,
            observability,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/moodspace
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("moodspace");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/moodspace or ~/.local/share/moodspace
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg).join("moodspace");
            }
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("moodspace");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\moodspace
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("moodspace");
        }
    }
    PathBuf::from(".moodspace")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()), None);
        assert_eq!(config.log, "info");
        assert_eq!(config.log_format, "pretty");
        assert_eq!(config.guest_user_id, "default");
        assert!(config.demo.seed_content);
    }

    #[test]
    fn toml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "log = \"debug\"\nguest_user_id = \"kiosk\"\n\n[demo]\nseed_content = false\n",
        )
        .unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()), None);
        assert_eq!(config.log, "debug");
        assert_eq!(config.guest_user_id, "kiosk");
        assert!(!config.demo.seed_content);
    }

    #[test]
    fn observability_section_parses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[observability]\nslow_query_ms = 250\n",
        )
        .unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()), None);
        assert_eq!(config.observability.slow_query_ms, 250);
    }

    #[test]
    fn cli_args_override_the_toml_layer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "log = \"debug\"\n").unwrap();
        let config = AppConfig::new(
            Some(dir.path().to_path_buf()),
            Some("warn".to_string()),
        );
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn unparseable_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "log = [not toml").unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()), None);
        assert_eq!(config.log, "info");
    }
}
