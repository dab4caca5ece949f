//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Journal backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Default config file locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("mood-journal").join("config.toml")),
            Some(PathBuf::from("./mood-journal.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load an explicit file, else the first default location that loads,
    /// else defaults. Environment overrides apply in every case.
    ///
    /// Runs before logging is set up, so problems that do not stop startup
    /// are returned as warnings for the caller to log.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Vec<String>), ConfigError> {
        let mut warnings = Vec::new();
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => Self::load_first(&Self::default_paths(), &mut warnings),
        };
        warnings.extend(config.apply_env_overrides(|key| std::env::var(key).ok()));
        Ok((config, warnings))
    }

    /// First existing file in `paths` that parses; broken files are skipped
    fn load_first(paths: &[PathBuf], warnings: &mut Vec<String>) -> Self {
        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => warnings.push(format!("Ignoring config file: {}", e)),
            }
        }
        Config::default()
    }

    /// Apply `MOOD_JOURNAL_*` overrides read through `var`. Returns a warning
    /// for each value that could not be used.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(url) = var("MOOD_JOURNAL_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = var("MOOD_JOURNAL_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(s) => self.api.request_timeout_secs = s,
                Err(_) => warnings.push(format!("Ignoring invalid MOOD_JOURNAL_TIMEOUT_SECS: {}", secs)),
            }
        }
        if let Some(level) = var("MOOD_JOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MOOD_JOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }
        warnings
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mood Journal Configuration
#
# Environment variables override these settings:
# - MOOD_JOURNAL_URL
# - MOOD_JOURNAL_TIMEOUT_SECS
# - MOOD_JOURNAL_LOG_LEVEL
# - MOOD_JOURNAL_LOG_FORMAT

[api]
# Journal backend serving /mood_history and /submit
base_url = "http://localhost:5000"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level (trace, debug, info, warn, error)
level = "warn"

# Log format (pretty, json)
format = "pretty"
"#
    .to_string()
}
