use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Platform and region every player lookup runs against.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        LookupOptions {
            platform: default_platform(),
            region: default_region(),
        }
    }
}

/// Configuration structure for the bot.
/// Handles loading, saving, and managing settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the player stats lookup service.
    #[serde(default = "default_stats_api_domain")]
    pub stats_api_domain: String,
    /// Base URL team pages are fetched from. Validated team URLs are rebuilt on this domain.
    #[serde(default = "default_roster_domain")]
    pub roster_domain: String,
    #[serde(default)]
    pub lookup: LookupOptions,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every outbound request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Minimum time before a reply is delivered.
    #[serde(default = "default_min_reply_delay")]
    pub min_reply_delay_ms: u64,
}

fn default_stats_api_domain() -> String {
    constants::DEFAULT_STATS_API_DOMAIN.to_string()
}

fn default_roster_domain() -> String {
    constants::DEFAULT_ROSTER_DOMAIN.to_string()
}

fn default_platform() -> String {
    constants::DEFAULT_PLATFORM.to_string()
}

fn default_region() -> String {
    constants::DEFAULT_REGION.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_min_reply_delay() -> u64 {
    constants::DEFAULT_MIN_REPLY_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_api_domain: default_stats_api_domain(),
            roster_domain: default_roster_domain(),
            lookup: LookupOptions::default(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            min_reply_delay_ms: default_min_reply_delay(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `BB_STATS_API_DOMAIN` - Override the stats lookup service
    /// - `BB_ROSTER_DOMAIN` - Override the team page domain
    /// - `BB_PLATFORM` / `BB_REGION` - Override the lookup platform and region
    /// - `BB_LOG_FILE` - Override log file path
    /// - `BB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `BB_*` environment overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(domain) = std::env::var(constants::env::STATS_API_DOMAIN) {
            self.stats_api_domain = domain;
        }

        if let Ok(domain) = std::env::var(constants::env::ROSTER_DOMAIN) {
            self.roster_domain = domain;
        }

        if let Ok(platform) = std::env::var(constants::env::PLATFORM) {
            self.lookup.platform = platform;
        }

        if let Ok(region) = std::env::var(constants::env::REGION) {
            self.lookup.region = region;
        }

        if let Ok(log_file_path) = std::env::var(constants::env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(constants::env::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
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
            println!("(Using defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Stats API Domain:");
        println!("{}", config.stats_api_domain);
        println!("────────────────────────────────────");
        println!("Team Page Domain:");
        println!("{}", config.roster_domain);
        println!("────────────────────────────────────");
        println!("Platform / Region:");
        println!("{} / {}", config.lookup.platform, config.lookup.region);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Minimum Reply Delay:");
        println!("{} ms", config.min_reply_delay_ms);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/bb_summarizer.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Missing keys take their defaults.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
