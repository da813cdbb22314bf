//! Object graph construction options

use serde::{Deserialize, Serialize};

/// How the configuration walk and resolution behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Walk connections, aisles and shuttles ordered by their numbers
    /// instead of configuration order
    pub sort_siblings: bool,

    /// Resolve every binding right after the graph is built
    pub eager: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            sort_siblings: true,
            eager: false,
        }
    }
}
