use crate::error::FrcError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Hosts cannot be empty and must carry an http:// or https:// scheme
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    production_url: &str,
    staging_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), FrcError> {
    validate_host("production_url", production_url)?;
    validate_host("staging_url", staging_url)?;

    if http_timeout_seconds == 0 {
        return Err(FrcError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(FrcError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

fn validate_host(field: &str, url: &str) -> Result<(), FrcError> {
    if url.trim().is_empty() {
        return Err(FrcError::config_error(format!("{field} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FrcError::config_error(format!(
            "{field} must start with http:// or https:// (got '{url}')"
        )));
    }

    Ok(())
}
