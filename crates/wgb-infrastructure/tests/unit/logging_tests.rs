//! Logging Tests

use std::fs;
use std::io::Write;

use tempfile::TempDir;
use tracing::Level;
use wgb_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use wgb_infrastructure::logging::{LoggingConfig, parse_log_level, rolling_file_appender};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_no_appender_without_file_output() {
    let appender = rolling_file_appender(&LoggingConfig::default()).unwrap();
    assert!(appender.is_none());
}

#[test]
fn test_appender_writes_prefixed_file_in_configured_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        file_output: Some(temp_dir.path().join("logs").join("graph.log")),
        max_files: 2,
        ..LoggingConfig::default()
    };

    let mut appender = rolling_file_appender(&config).unwrap().unwrap();
    appender.write_all(b"wired\n").unwrap();
    appender.flush().unwrap();

    let names: Vec<String> = fs::read_dir(temp_dir.path().join("logs"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("graph."), "unexpected log file {}", names[0]);
    assert!(names[0].ends_with(".log"), "unexpected log file {}", names[0]);
}
