use super::Config;
use crate::data_fetcher::processors::parse_display_timezone;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Output path cannot be empty
/// - At least one game must be emitted
/// - Byte budget must be non-zero
/// - HTTP timeout must be non-zero
/// - Display timezone must be a known IANA zone name
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_base_url.trim().is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.max_games == 0 {
        return Err(AppError::config_error("max_games must be at least 1"));
    }

    if config.byte_budget == 0 {
        return Err(AppError::config_error("byte_budget must be greater than 0"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than 0",
        ));
    }

    parse_display_timezone(&config.display_timezone)?;

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
