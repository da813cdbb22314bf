//! # Warehouse Graph Builder
//!
//! Configuration-driven wiring of a warehouse: connections, aisles and the
//! shuttles inside them are turned into one graph of shared singletons.
//!
//! ## Example
//!
//! ```
//! use wgb::{ConfigAisle, ConfigConnection, ConfigShuttle, TopologyConfig};
//! use wgb::di::{TopologyGraphExt, build_object_graph};
//!
//! let topology = TopologyConfig::new()
//!     .with_connection(ConfigConnection::new(1))
//!     .with_aisle(ConfigAisle::new(1).with_shuttle(ConfigShuttle::new(1, 1, 1)));
//!
//! let graph = build_object_graph(&topology).unwrap();
//! let app = graph.app().unwrap();
//! assert_eq!(app.shuttles().count(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identities, topology data, leaf entities and errors
//! - `infrastructure` - scoped object graph, configuration and logging
//! - [`report`] - text and JSON renderings used by the `wgb` binary

/// Domain layer - identities, topology data and leaf entities
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wgb_domain::*;
}

/// Infrastructure layer - object graph, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wgb_infrastructure::*;
}

pub mod report;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the graph builder at the crate root
pub use wgb_infrastructure::di;
pub use wgb_infrastructure::config::{AppConfig, ConfigLoader};
