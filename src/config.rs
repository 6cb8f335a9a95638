use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

/// Search pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of results per page.
    pub results_per_page: usize,
    /// Base path for static assets; image URLs resolve under
    /// `<asset_base>/images/<filename>`.
    pub asset_base: String,
    /// Maximum number of query tokens examined during extraction.
    pub max_query_tokens: usize,
}

/// Storage connection configuration.
///
/// The seven connection parameters mirror the environment contract
/// (`FITSEARCH_DB_*`); `warehouse` is carried for contract completeness but
/// not consumed by the Postgres backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    /// Endpoint as `host` or `host:port`.
    pub account: Option<String>,
    pub role: Option<String>,
    pub warehouse: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    /// Table holding exercise rows.
    pub table: String,
    pub max_connections: u32,
    pub query_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            results_per_page: 10,
            asset_base: "/static".to_string(),
            max_query_tokens: 64,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user: None,
            password: None,
            account: None,
            role: None,
            warehouse: None,
            database: None,
            schema: None,
            table: "exercises".to_string(),
            max_connections: 5,
            query_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/fitsearch/config.toml`, then
    /// overlay the storage environment variables. Returns defaults (plus the
    /// environment overlay) if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        };
        config.storage.overlay_env();
        config
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("fitsearch").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl StorageConfig {
    /// Overlay the seven connection parameters from the environment.
    /// Unset or empty variables leave the current value in place.
    pub fn overlay_env(&mut self) {
        self.user = env_or(self.user.take(), "FITSEARCH_DB_USER");
        self.password = env_or(self.password.take(), "FITSEARCH_DB_PASSWORD");
        self.account = env_or(self.account.take(), "FITSEARCH_DB_ACCOUNT");
        self.role = env_or(self.role.take(), "FITSEARCH_DB_ROLE");
        self.warehouse = env_or(self.warehouse.take(), "FITSEARCH_DB_WAREHOUSE");
        self.database = env_or(self.database.take(), "FITSEARCH_DB_DATABASE");
        self.schema = env_or(self.schema.take(), "FITSEARCH_DB_SCHEMA");
    }

    /// Per-query timeout as a `Duration`.
    pub fn query_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.query_timeout_ms)
    }
}

fn env_or(current: Option<String>, name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => current,
    }
}
