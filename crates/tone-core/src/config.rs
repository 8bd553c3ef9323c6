use crate::{Thresholds, ToneError};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the trained model artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/sentiment.json";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tone.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub model: ModelConfig,
    pub thresholds: Thresholds,
    pub http: HttpConfig,
}

impl ToneConfig {
    /// Load config from a TOML file, then apply env var overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Like [`ToneConfig::load`], but a missing file yields defaults (still
    /// env-overridden). A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut config = Self::from_toml(&content)
                    .with_context(|| format!("Invalid config file: {}", path.display()))?;
                config.apply_env_overrides();
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                let mut config = Self::default();
                config.apply_env_overrides();
                Ok(config)
            }
            Err(e) => Err(ToneError::io(path, e)).context("Failed to read config file"),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ToneError::Config(e.to_string()))
            .context("Failed to parse TOML config")
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable numbers are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TONE_MODEL_PATH") {
            self.model.path = PathBuf::from(v);
        }
        if let Some(n) = lookup("TONE_POS_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.thresholds.positive = n;
        }
        if let Some(n) = lookup("TONE_NEG_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.thresholds.negative = n;
        }
        if let Some(v) = lookup("TONE_HTTP_HOST") {
            self.http.host = v;
        }
        if let Some(n) = lookup("PORT").and_then(|v| v.parse().ok()) {
            self.http.port = n;
        }
        if let Some(v) = lookup("ENABLE_HTTP") {
            self.http.enabled = v == "1";
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Start the server when the CLI is invoked without a subcommand.
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}
