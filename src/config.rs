use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DaylogConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub provider: ProviderConfig,
    pub embedding: EmbeddingConfig,
    pub judge: JudgeConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub journal_path: String,
}

/// Connection settings shared by the embedding and judgement collaborators.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct JudgeConfig {
    pub model: String,
    pub max_completion_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_n: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let journal_path = default_daylog_dir()
            .join("journal.json")
            .to_string_lossy()
            .into_owned();
        Self { journal_path }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-small".into(),
        }
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            max_completion_tokens: 150,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_n: crate::journal::retrieve::DEFAULT_TOP_N,
        }
    }
}

/// Returns `~/.daylog/`, or `./.daylog/` when no home directory is known.
pub fn default_daylog_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".daylog")
}

/// Returns the default config file path: `~/.daylog/config.toml`
pub fn default_config_path() -> PathBuf {
    default_daylog_dir().join("config.toml")
}

impl DaylogConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            DaylogConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (DAYLOG_JOURNAL, DAYLOG_LOG_LEVEL, OPENAI_API_KEY, OPENAI_BASE_URL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DAYLOG_JOURNAL") {
            self.storage.journal_path = val;
        }
        if let Ok(val) = std::env::var("DAYLOG_LOG_LEVEL") {
            self.general.log_level = val;
        }
        if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.provider.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("OPENAI_BASE_URL") {
            self.provider.base_url = val;
        }
    }

    /// Resolve the journal file path, expanding `~` if needed.
    pub fn resolved_journal_path(&self) -> PathBuf {
        expand_tilde(&self.storage.journal_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
