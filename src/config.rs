//! Runtime configuration for the report binaries.
//!
//! The Tidelift API key comes from the environment; the optional
//! `tidelift-sbom.config.yml` file can point the client at another API
//! base URL, change the lookup chunk size, or set a request timeout.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::shared::error::ReporterError;
use crate::shared::Result;

/// Environment variable holding the Tidelift API key
pub const API_KEY_ENV: &str = "TIDELIFT_API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://api.tidelift.com/external-api/v1";

/// Maximum number of purls sent in one lookup request
pub const DEFAULT_CHUNK_SIZE: usize = 500;

const CONFIG_FILENAME: &str = "tidelift-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub chunk_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReporterError::InvalidConfig {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReporterError::InvalidConfig {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if config.chunk_size == Some(0) {
        return Err(ReporterError::InvalidConfig {
            path: path.to_path_buf(),
            details: "chunk_size must be at least 1".to_string(),
        }
        .into());
    }

    if let Some(url) = &config.api_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ReporterError::InvalidConfig {
                path: path.to_path_buf(),
                details: format!("api_base_url must be an http(s) URL, got '{}'", url),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Resolved settings for one run.
///
/// Built once at startup and handed to the API client; nothing else reads
/// the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_key: String,
    api_base_url: String,
    chunk_size: usize,
    timeout: Option<Duration>,
}

impl AppConfig {
    /// Creates a configuration with default endpoint and chunk size
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: None,
        }
    }

    /// Combines an API key with optional file settings
    ///
    /// # Errors
    /// Returns [`ReporterError::MissingApiKey`] if the key is absent or empty
    pub fn resolve(api_key: Option<String>, file: Option<ConfigFile>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ReporterError::MissingApiKey {
                variable: API_KEY_ENV,
            })?;

        let mut config = Self::new(api_key);
        if let Some(file) = file {
            if let Some(url) = file.api_base_url {
                config = config.with_api_base_url(url);
            }
            if let Some(size) = file.chunk_size {
                config = config.with_chunk_size(size);
            }
            if let Some(seconds) = file.timeout_seconds {
                config = config.with_timeout(Duration::from_secs(seconds));
            }
        }
        Ok(config)
    }

    /// Reads the API key from the environment and the config file from
    /// `config_path`, or from the working directory when no path is given
    pub fn from_environment(config_path: Option<&Path>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok();

        let file = match config_path {
            Some(path) => Some(load_config_from_path(path)?),
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                discover_config(&cwd)?
            }
        };

        Self::resolve(api_key, file)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("chunk_size", &self.chunk_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}
