//! Graph modules
//!
//! ```text
//! GraphBuilder
//! └── TopologyModule (aisles, shuttles, connections, app)
//! ```

/// Module trait
pub mod traits;

/// Configuration walk over a topology
pub mod topology;

pub use topology::{TopologyGraphExt, TopologyModule, build_from_config, build_object_graph};
pub use traits::GraphModule;
