//! Structured logging with tracing
//!
//! Installs the global subscriber used by the binary. The configuration walk
//! and the resolver log through `tracing` macros regardless of whether a
//! subscriber is installed.

use std::path::Path;

use tracing::{Level, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wgb_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_FILTER};

/// Initialize logging with the provided configuration
///
/// `WGB_LOG` overrides the configured level with a full filter directive.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = rolling_file_appender(&config)?;

    // Layer types differ between plain and JSON output
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(std::io::stderr);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    } else {
        let console = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(std::io::stderr);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    };
    installed.map_err(|e| Error::internal(format!("Failed to install subscriber: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Daily-rolling appender for `file_output`, keeping at most `max_files`
///
/// Returns `None` when file output is disabled. The file stem becomes the
/// name prefix and the extension, if any, the suffix.
pub fn rolling_file_appender(config: &LoggingConfig) -> Result<Option<RollingFileAppender>> {
    let Some(path) = config.file_output.as_ref() else {
        return Ok(None);
    };
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path.file_stem().map_or_else(
        || DEFAULT_LOG_FILE_STEM.to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    );

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(config.max_files);
    if let Some(extension) = path.extension() {
        builder = builder.filename_suffix(extension.to_string_lossy().into_owned());
    }

    builder
        .build(directory)
        .map(Some)
        .map_err(|e| {
            Error::internal(format!("Failed to open log file {}: {e}", path.display()))
        })
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log the configuration file that was merged
pub fn log_config_loaded(config_path: &Path) {
    info!("Configuration loaded from {}", config_path.display());
}
