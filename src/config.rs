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
    pub api: ApiSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream Anchor Platform API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL; JSON-RPC calls go to `<url>/v2`
    #[serde(default = "default_api_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Dashboard host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built dashboard (`index.html` + WASM bundle)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("anchor-platform-ui/dist")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerSettings {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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
    /// Nothing is logged here since the subscriber is usually installed from
    /// the loaded settings; call [`ConfigOrigin::log`] once it is.
    pub fn load_default() -> (Self, ConfigOrigin) {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("anchor-platform").join("config.toml")),
            Some(PathBuf::from("./anchor-platform.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first candidate file that exists and parses
    fn load_first(candidates: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::default();

        for path in candidates.iter().filter(|path| path.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    origin.path = Some(path.clone());
                    return (config, origin);
                }
                Err(e) => origin.rejected.push(e),
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("ANCHOR_API_PATH") {
            self.api.url = url;
        }
        if let Some(timeout) = lookup("ANCHOR_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        // Server overrides
        if let Some(host) = lookup("ANCHOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ANCHOR_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dist) = lookup("ANCHOR_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist);
        }

        // Logging overrides
        if let Some(level) = lookup("ANCHOR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ANCHOR_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Default)]
pub struct ConfigOrigin {
    /// File the settings were read from; `None` means defaults
    pub path: Option<PathBuf>,
    /// Candidate files that exist but could not be loaded
    pub rejected: Vec<ConfigError>,
}

impl ConfigOrigin {
    pub fn file(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            rejected: Vec::new(),
        }
    }

    /// Report the config source through tracing
    pub fn log(&self) {
        for error in &self.rejected {
            tracing::warn!("Skipped config file: {}", error);
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
    r#"# Anchor Platform Dashboard Configuration
#
# Environment variables override these settings:
# - ANCHOR_API_PATH
# - ANCHOR_API_TIMEOUT_SECS
# - ANCHOR_HOST
# - ANCHOR_PORT
# - ANCHOR_DIST_DIR
# - ANCHOR_LOG_LEVEL
# - ANCHOR_LOG_FORMAT

[api]
# Anchor Platform JSON-RPC API (calls go to <url>/v2)
url = "http://localhost:8082"

# Request timeout in seconds
request_timeout_secs = 10

[server]
# Dashboard host address
host = "127.0.0.1"
port = 8080

# Built dashboard (trunk build output)
dist_dir = "anchor-platform-ui/dist"

# Allowed CORS origins (empty = any)
cors_origins = []

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
        assert_eq!(config.api.url, "http://localhost:8082");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.url, defaults.api.url);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nurl = \"https://anchors.example.com/\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.url, "https://anchors.example.com/");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/anchor-platform.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_skips_broken_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server]\nport = \"eighty\"").unwrap();
        std::fs::write(&good, "[server]\nport = 9100").unwrap();
        let missing = dir.path().join("missing.toml");

        let (config, origin) = Config::load_first(&[missing, broken, good.clone()]);

        assert_eq!(config.server.port, 9100);
        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.rejected.len(), 1);
        assert!(matches!(origin.rejected[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let (config, origin) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert!(origin.path.is_none());
        assert!(origin.rejected.is_empty());
        assert_eq!(config.api.request_timeout_secs, 10);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ANCHOR_API_PATH", "http://10.0.0.5:8082"),
            ("ANCHOR_PORT", "9000"),
            ("ANCHOR_API_TIMEOUT_SECS", "soon"),
            ("ANCHOR_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.url, "http://10.0.0.5:8082");
        assert_eq!(config.server.port, 9000);
        // unparsable values keep the previous setting
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
