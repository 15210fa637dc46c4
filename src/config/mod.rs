use crate::constants::{self, env_vars};
use crate::error::FrcError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// The two FIRST API hosts a session can target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub production: String,
    pub staging: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        ApiEndpoints {
            production: constants::PRODUCTION_URL.to_string(),
            staging: constants::STAGING_URL.to_string(),
        }
    }
}

/// Client configuration.
/// Credentials are deliberately absent: they belong to the [`crate::Session`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Production API host, including the https:// prefix.
    #[serde(default = "default_production_url")]
    pub production_url: String,
    /// Staging API host, including the https:// prefix.
    #[serde(default = "default_staging_url")]
    pub staging_url: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Directory holding local fixtures. Defaults to the crate's `fixtures/`
    /// directory, resolved from `CARGO_MANIFEST_DIR` at build time, so a binary
    /// moved off the build machine needs this set (or `FRC_API_FIXTURE_DIR`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_dir: Option<String>,
    /// Path to the log file. If not specified, logs only go to stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_production_url() -> String {
    constants::PRODUCTION_URL.to_string()
}

fn default_staging_url() -> String {
    constants::STAGING_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            production_url: default_production_url(),
            staging_url: default_staging_url(),
            http_timeout_seconds: default_http_timeout(),
            fixture_dir: None,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling back
    /// to defaults when no file exists. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `FRC_API_PRODUCTION_URL` - Override production host
    /// - `FRC_API_STAGING_URL` - Override staging host
    /// - `FRC_API_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FRC_API_FIXTURE_DIR` - Override local fixture directory
    /// - `FRC_API_LOG_FILE` - Override log file path
    pub fn load() -> Result<Self, FrcError> {
        let config_path = get_config_path();

        let config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file without applying environment overrides.
    pub fn load_from_path(path: &str) -> Result<Self, FrcError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(env_vars::PRODUCTION_URL) {
            self.production_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::STAGING_URL) {
            self.staging_url = url;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(dir) = std::env::var(env_vars::FIXTURE_DIR) {
            self.fixture_dir = Some(dir);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        self
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), FrcError> {
        validate_config(
            &self.production_url,
            &self.staging_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Hosts used by the URL builder.
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints {
            production: self.production_url.trim_end_matches('/').to_string(),
            staging: self.staging_url.trim_end_matches('/').to_string(),
        }
    }

    /// Directory the local source reads fixtures from.
    pub fn fixture_root(&self) -> PathBuf {
        match &self.fixture_dir {
            Some(dir) => PathBuf::from(dir),
            None => paths::bundled_fixture_dir(),
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
production_url = "https://frc-api.example.org"
http_timeout_seconds = 5
fixture_dir = "/srv/frc/fixtures"
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();

        assert_eq!(config.production_url, "https://frc-api.example.org");
        assert_eq!(config.staging_url, constants::STAGING_URL);
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.fixture_dir.as_deref(), Some("/srv/frc/fixtures"));
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_rejects_invalid_url() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "staging_url = \"frc staging\"\n").unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result, Err(FrcError::Config(_))));
    }

    #[test]
    fn test_config_load_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result, Err(FrcError::Io(_))));
    }

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let config = Config {
            production_url: "http://127.0.0.1:8080/".to_string(),
            ..Config::default()
        };
        let endpoints = config.endpoints();
        assert_eq!(endpoints.production, "http://127.0.0.1:8080");
        assert_eq!(endpoints.staging, constants::STAGING_URL);
    }

    #[test]
    fn test_fixture_root_prefers_configured_dir() {
        let config = Config {
            fixture_dir: Some("/tmp/frc".to_string()),
            ..Config::default()
        };
        assert_eq!(config.fixture_root(), PathBuf::from("/tmp/frc"));
        assert!(Config::default().fixture_root().ends_with("fixtures"));
    }

    #[test]
    #[serial]
    fn test_fixture_dir_env_relocates_build_time_default() {
        assert_eq!(
            Config::default().fixture_root(),
            Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
        );

        unsafe {
            std::env::set_var(env_vars::FIXTURE_DIR, "/opt/frc/fixtures");
        }
        let config = Config::default().with_env_overrides();
        unsafe {
            std::env::remove_var(env_vars::FIXTURE_DIR);
        }

        assert_eq!(config.fixture_root(), PathBuf::from("/opt/frc/fixtures"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::PRODUCTION_URL, "http://localhost:9999");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "12");
            std::env::set_var(env_vars::FIXTURE_DIR, "/tmp/fixtures");
        }

        let config = Config::default().with_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::PRODUCTION_URL);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::FIXTURE_DIR);
        }

        assert_eq!(config.production_url, "http://localhost:9999");
        assert_eq!(config.http_timeout_seconds, 12);
        assert_eq!(config.fixture_dir.as_deref(), Some("/tmp/fixtures"));
        assert_eq!(config.staging_url, constants::STAGING_URL);
    }

    #[test]
    #[serial]
    fn test_env_override_ignores_unparsable_timeout() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }
        let config = Config::default().with_env_overrides();
        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
        assert_eq!(config.http_timeout_seconds, constants::DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config {
            log_file_path: Some("/var/log/frc_api.log".to_string()),
            ..Config::default()
        };
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("log_file_path"));
        assert!(!content.contains("fixture_dir"));
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }
}
