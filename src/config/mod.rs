use crate::constants::{self, env_vars};
use crate::error::AppError;
use crate::output::DetailTier;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the sports API; scoreboard and summary paths are appended.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Where the minified document is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Also write an indented copy next to the minified document.
    #[serde(default = "default_true")]
    pub write_pretty_copy: bool,
    /// Number of ranked games emitted into the document.
    #[serde(default = "default_max_games")]
    pub max_games: usize,
    /// Byte ceiling for the minified document.
    #[serde(default = "default_byte_budget")]
    pub byte_budget: usize,
    /// Detail tier of the featured game.
    #[serde(default = "default_featured_tier")]
    pub featured_tier: DetailTier,
    /// Detail tier of every other game.
    #[serde(default = "default_secondary_tier")]
    pub secondary_tier: DetailTier,
    /// Completed drives kept by size-constrained tiers.
    #[serde(default = "default_drive_limit")]
    pub drive_limit: usize,
    /// IANA zone for the local start time, e.g. `America/Los_Angeles`.
    #[serde(default = "default_display_timezone")]
    pub display_timezone: String,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Static API credential. Only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_output_path() -> String {
    constants::output::DEFAULT_OUTPUT_PATH.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_games() -> usize {
    constants::output::DEFAULT_MAX_GAMES
}

fn default_byte_budget() -> usize {
    constants::output::DEFAULT_BYTE_BUDGET
}

fn default_featured_tier() -> DetailTier {
    DetailTier::Standard
}

fn default_secondary_tier() -> DetailTier {
    DetailTier::Minimal
}

fn default_drive_limit() -> usize {
    constants::enrichment::DEFAULT_DRIVE_LIMIT
}

fn default_display_timezone() -> String {
    constants::DEFAULT_DISPLAY_TIMEZONE.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            output_path: default_output_path(),
            write_pretty_copy: default_true(),
            max_games: default_max_games(),
            byte_budget: default_byte_budget(),
            featured_tier: default_featured_tier(),
            secondary_tier: default_secondary_tier(),
            drive_limit: default_drive_limit(),
            display_timezone: default_display_timezone(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
            api_key: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: the run is unattended, so
    /// defaults are used instead of prompting.
    ///
    /// # Environment Variables
    /// - `SCOREBOARD_API_BASE_URL` - Override API base URL
    /// - `SCOREBOARD_API_KEY` - Static API credential
    /// - `SCOREBOARD_OUTPUT_PATH` - Override output path
    /// - `SCOREBOARD_LOG_FILE` - Override log file path
    /// - `SCOREBOARD_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SCOREBOARD_BYTE_BUDGET` - Override byte budget
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    /// Unparseable numeric overrides are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(output_path) = std::env::var(env_vars::OUTPUT_PATH) {
            self.output_path = output_path;
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

        if let Some(budget) = std::env::var(env_vars::BYTE_BUDGET)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.byte_budget = budget;
        }

        self.api_key = std::env::var(env_vars::API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The API key is never printed, only whether one is set.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("API Key:");
        println!("{}", if config.api_key.is_some() { "set" } else { "not set" });
        println!("────────────────────────────────────");
        println!("Output:");
        println!("{}", config.output_path);
        if config.write_pretty_copy {
            println!("{}", paths::pretty_copy_path(&config.output_path));
        }
        println!(
            "{} games, {} byte budget, featured tier {}, others {}",
            config.max_games,
            config.byte_budget,
            config.featured_tier,
            config.secondary_tier
        );
        println!("Start times shown in {}", config.display_timezone);
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

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
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

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
