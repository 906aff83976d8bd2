use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_VALIDATION_URL};

const CONFIG_FILE: &str = "config.yaml";

/// Client settings loaded from `~/.mailcamp/config.yaml` plus environment overrides
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub email_validation_url: String,
    pub request_timeout_secs: u64,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: String::from(DEFAULT_API_BASE),
            email_validation_url: String::from(DEFAULT_VALIDATION_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Directory holding the config file
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mailcamp")
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_dir().join(CONFIG_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default().normalized());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config.normalized())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup("MAILCAMP_API_BASE").filter(|v| !v.is_empty()) {
            self.api_base = base;
        }
        if let Some(url) = lookup("MAILCAMP_VALIDATION_URL").filter(|v| !v.is_empty()) {
            self.email_validation_url = url;
        }
        *self = std::mem::take(self).normalized();
    }

    fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        self
    }
}
