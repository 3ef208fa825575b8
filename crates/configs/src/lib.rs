//! Configuration for the console: where the remote data store lives and how
//! to authenticate against it. Values come from `config.toml` (path
//! overridable via `CONFIG_PATH`) with environment variables taking
//! precedence, so deployments can run without a config file at all.

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted store, e.g. `https://abc.supabase.co`.
    #[serde(default)]
    pub url: String,
    /// Project API key, sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: String::new(), api_key: String::new() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_or_default(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// A missing file means "run on environment variables alone" and falls back
/// to defaults; a file that exists but fails to parse is a hard error, not
/// something to silently paper over.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if !std::path::Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(path)
}

impl AppConfig {
    /// Load `config.toml` if present, overlay the environment, validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.data_store.overlay_env();
        cfg.data_store.validate()?;
        Ok(cfg)
    }
}

impl StoreConfig {
    /// `STORE_URL` / `STORE_API_KEY` win over file values.
    pub fn overlay_env(&mut self) {
        if let Ok(url) = std::env::var("STORE_URL") {
            self.url = url;
        }
        if let Ok(key) = std::env::var("STORE_API_KEY") {
            self.api_key = key;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("data_store.url is empty; set it in config.toml or STORE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("data_store.url must start with http:// or https://"));
        }
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("data_store.api_key is empty; set it in config.toml or STORE_API_KEY"));
        }
        Ok(())
    }
}
