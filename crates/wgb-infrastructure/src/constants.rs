//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Identity names used by the configuration walk are defined in
//! `wgb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wgb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wgb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WGB";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// GRAPH CONSTANTS
// ============================================================================

/// Label of the global root scope
pub const ROOT_SCOPE_LABEL: &str = "root";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_FILTER: &str = "WGB_LOG";

/// Log file name stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wgb";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;
