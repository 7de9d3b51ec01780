//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding the built dashboard, served at `/` when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream research service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Research endpoint; the token is appended as `?token=`
    #[serde(default = "default_upstream_url")]
    pub url: String,

    #[serde(default = "default_upstream_timeout")]
    pub timeout_ms: u64,

    /// Relay the upstream status code instead of always answering 200
    #[serde(default = "default_propagate_status")]
    pub propagate_status: bool,
}

fn default_upstream_url() -> String {
    "https://api.tokenresearch.ai/research".to_string()
}

fn default_upstream_timeout() -> u64 {
    30_000
}

fn default_propagate_status() -> bool {
    true
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_ms: default_upstream_timeout(),
            propagate_status: default_propagate_status(),
        }
    }
}

impl UpstreamConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since this runs before the subscriber is
    /// installed; call [`LoadedConfig::log`] afterwards.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("tokenscope").join("config.toml")),
            Some(PathBuf::from("/etc/tokenscope/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::search(&config_paths)
    }

    /// Load the first existing file of `paths` that parses, else defaults.
    /// Environment overrides apply either way.
    pub fn search(paths: &[PathBuf]) -> LoadedConfig {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        path: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            path: None,
            errors,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a `TOKENSCOPE_*` variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("TOKENSCOPE_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("TOKENSCOPE_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }
        if let Some(dir) = lookup("TOKENSCOPE_STATIC_DIR") {
            self.api.static_dir = Some(dir);
        }

        // Upstream overrides
        if let Some(url) = lookup("TOKENSCOPE_UPSTREAM_URL") {
            self.upstream.url = url;
        }
        if let Some(timeout) = lookup("TOKENSCOPE_UPSTREAM_TIMEOUT_MS").and_then(|t| t.parse().ok())
        {
            self.upstream.timeout_ms = timeout;
        }
        if let Some(propagate) =
            lookup("TOKENSCOPE_UPSTREAM_PROPAGATE_STATUS").and_then(|p| p.parse().ok())
        {
            self.upstream.propagate_status = propagate;
        }

        // Logging overrides
        if let Some(level) = lookup("TOKENSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TOKENSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means defaults
    pub path: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report where the config came from
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("{}", error);
        }

        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
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
    r#"# Tokenscope Configuration
#
# Environment variables override these settings:
# - TOKENSCOPE_HOST
# - TOKENSCOPE_PORT
# - TOKENSCOPE_STATIC_DIR
# - TOKENSCOPE_UPSTREAM_URL
# - TOKENSCOPE_UPSTREAM_TIMEOUT_MS
# - TOKENSCOPE_UPSTREAM_PROPAGATE_STATUS
# - TOKENSCOPE_LOG_LEVEL
# - TOKENSCOPE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8083

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Directory with the built dashboard (trunk build output)
# static_dir = "tokenscope-ui/dist"

[upstream]
# Research service endpoint; the token is sent as ?token=<id>
url = "https://api.tokenresearch.ai/research"

# Upstream request timeout (ms)
timeout_ms = 30000

# Relay the upstream HTTP status (false = always answer 200)
propagate_status = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.addr(), "0.0.0.0:8083");
        assert!(config.api.static_dir.is_none());
        assert_eq!(config.upstream.timeout_ms, 30_000);
        assert!(config.upstream.propagate_status);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8083);
        assert_eq!(config.upstream.url, default_upstream_url());
        assert!(config.api.cors_origins.is_empty());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[upstream]
url = "http://127.0.0.1:9000/research"
propagate_status = false
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.upstream.url, "http://127.0.0.1:9000/research");
        assert!(!config.upstream.propagate_status);
        assert_eq!(config.upstream.timeout_ms, 30_000);
        assert_eq!(config.api.port, 8083);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TOKENSCOPE_PORT", "9999"),
            ("TOKENSCOPE_UPSTREAM_URL", "http://upstream.local/research"),
            ("TOKENSCOPE_UPSTREAM_TIMEOUT_MS", "not-a-number"),
            ("TOKENSCOPE_STATIC_DIR", "dist"),
            ("TOKENSCOPE_UPSTREAM_PROPAGATE_STATUS", "false"),
            ("TOKENSCOPE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9999);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.static_dir.as_deref(), Some("dist"));
        assert_eq!(config.upstream.url, "http://upstream.local/research");
        assert_eq!(config.upstream.timeout_ms, 30_000);
        assert!(!config.upstream.propagate_status);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_search_skips_broken_file_and_keeps_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\nport = ").unwrap();
        std::fs::write(&good, "[api]\nhost = \"127.0.0.1\"\n").unwrap();

        let loaded = Config::search(&[dir.path().join("absent.toml"), broken.clone(), good.clone()]);

        assert_eq!(loaded.path.as_deref(), Some(good.as_path()));
        assert_eq!(loaded.errors.len(), 1);
        assert!(matches!(&loaded.errors[0], ConfigError::Parse { path, .. } if *path == broken));
    }

    #[test]
    fn test_search_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "not = [valid").unwrap();

        let loaded = Config::search(&[broken]);

        assert!(loaded.path.is_none());
        assert_eq!(loaded.errors.len(), 1);
        assert_eq!(loaded.config.upstream.timeout_ms, 30_000);
    }
}
