//! Main application configuration

use serde::{Deserialize, Serialize};
use wgb_domain::value_objects::TopologyConfig;

pub use super::graph::GraphConfig;
pub use super::logging::LoggingConfig;

/// Main application configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [graph]
/// sort_siblings = true
///
/// [[topology.connections]]
/// num = 1
///
/// [[topology.aisles]]
/// num = 1
/// shuttles = [{ id = 1, num = 1, connNum = 1 }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Graph construction options
    #[serde(default)]
    pub graph: GraphConfig,

    /// Aisles, shuttles and connections to wire
    #[serde(default)]
    pub topology: TopologyConfig,
}
