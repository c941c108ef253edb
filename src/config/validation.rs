use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both domains must be non-empty http(s) URLs or look like a domain name
/// - Platform and region cannot be empty or contain path separators
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_domain("Stats API domain", &config.stats_api_domain)?;
    validate_domain("Team page domain", &config.roster_domain)?;

    validate_path_segment("Platform", &config.lookup.platform)?;
    validate_path_segment("Region", &config.lookup.region)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

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

fn validate_domain(label: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !domain.contains('.') && !domain.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{label} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}

fn validate_path_segment(label: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }
    if value.contains('/') || value.contains(char::is_whitespace) {
        return Err(AppError::config_error(format!(
            "{label} must be a single word, got '{value}'"
        )));
    }
    Ok(())
}
