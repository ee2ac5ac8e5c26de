use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{normalize_api_domain, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the statistics provider. Should include the protocol prefix.
    pub api_domain: String,
    /// Provider id of the tracked athlete.
    #[serde(default = "default_player_id")]
    pub player_id: String,
    /// Address the web server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for provider requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_player_id() -> String {
    constants::DEFAULT_PLAYER_ID.to_string()
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDRESS.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            player_id: default_player_id(),
            bind_address: default_bind_address(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables override config file values; without a config
    /// file the defaults plus environment are used.
    ///
    /// # Environment Variables
    /// - `COURTSIDE_API_DOMAIN` - Override API domain
    /// - `COURTSIDE_PLAYER_ID` - Override tracked player id
    /// - `COURTSIDE_BIND_ADDRESS` - Override server bind address
    /// - `COURTSIDE_LOG_FILE` - Override log file path
    /// - `COURTSIDE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads `path` if it exists, applies environment overrides and validates.
    /// The API domain of the result always carries a scheme.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        config.api_domain = normalize_api_domain(&config.api_domain);

        Ok(config)
    }

    /// Loads the config file at `path` without environment overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `COURTSIDE_*` environment variables on top of the current values.
    /// Unparsable timeouts are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(player_id) = std::env::var(env_vars::PLAYER_ID) {
            self.player_id = player_id;
        }

        if let Ok(bind_address) = std::env::var(env_vars::BIND_ADDRESS) {
            self.bind_address = bind_address;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.player_id,
            &self.bind_address,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves configuration to `path`, creating the parent directory if needed.
    /// The API domain is normalised before it is written.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_domain: normalize_api_domain(&self.api_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let mut config = Config::load_from_path(&config_path).await?;
        config.apply_env_overrides();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Player:");
        println!("{}", config.player_id);
        println!("────────────────────────────────────");
        println!("Bind Address:");
        println!("{}", config.bind_address);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::PLAYER_ID);
            std::env::remove_var(env_vars::BIND_ADDRESS);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_domain = "https://api.example.com"
player_id = "curryst01"
bind_address = "0.0.0.0:8080"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.player_id, "curryst01");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, constants::DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_config_defaults_for_missing_fields() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = \"https://api.example.com\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.player_id, constants::DEFAULT_PLAYER_ID);
        assert_eq!(config.bind_address, constants::DEFAULT_BIND_ADDRESS);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_missing_required_field() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "player_id = \"jamesle01\"\n")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_save_normalizes_domain() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "api.example.com".to_string(),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();

        assert!(config_path.exists());
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(loaded.player_id, constants::DEFAULT_PLAYER_ID);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            api_domain: "https://api.example.com".to_string(),
            player_id: "duranke01".to_string(),
            bind_address: "127.0.0.1:4000".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 10,
        };

        original.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_log_file_path_skipped_when_none() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            ..Config::default()
        };
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://env.example.com");
            std::env::set_var(env_vars::PLAYER_ID, "antetgi01");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = \"https://file.example.com\"\n")
            .await
            .unwrap();

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_domain, "https://env.example.com");
        assert_eq!(config.player_id, "antetgi01");
        assert_eq!(config.http_timeout_seconds, 5);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_timeout_env_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://env.example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        let config = Config::load_with_overrides(&missing.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.http_timeout_seconds, constants::DEFAULT_HTTP_TIMEOUT_SECONDS);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_without_domain_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let result = Config::load_with_overrides(&missing.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_bare_env_domain_gets_https_scheme() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "api.example.com");
        }

        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        let config = Config::load_with_overrides(&missing.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.api_domain, "https://api.example.com");

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_bare_file_domain_gets_https_scheme() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = \"stats.example.com/\"\n")
            .await
            .unwrap();

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.api_domain, "https://stats.example.com");
    }
}
