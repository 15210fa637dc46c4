use crate::config::Config;
use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use crate::error::FrcError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a global tracing subscriber for applications embedding the client.
///
/// The library itself only emits `tracing` events; callers opt into output
/// by calling this once at startup:
/// - always logs to stderr
/// - additionally logs to a daily rolling file when `log_file_path` is configured
///
/// Returns the file writer guard when a file layer was installed. It must be
/// kept alive for the duration of the program so buffered lines get flushed.
pub fn setup_logging(config: &Config) -> Result<Option<WorkerGuard>, FrcError> {
    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(env_filter()?),
    );

    let Some(custom_path) = config.log_file_path.as_ref() else {
        registry
            .try_init()
            .map_err(|e| FrcError::log_setup_error(e.to_string()))?;
        return Ok(None);
    };

    let (log_dir, log_file_name) = split_log_path(custom_path);

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            FrcError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    registry
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()?),
        )
        .try_init()
        .map_err(|e| FrcError::log_setup_error(e.to_string()))?;

    Ok(Some(guard))
}

fn env_filter() -> Result<EnvFilter, FrcError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| FrcError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a configured log path into its directory and file name.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_string_lossy().to_string(),
        _ => Config::get_log_dir_path(),
    };
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME)
        .to_string();
    (parent, file_name)
}
