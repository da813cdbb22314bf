//! Object Graph Tests
//!
//! - Registration, visibility and freezing (builder_tests)
//! - Resolution, singletons, cycles and sticky failures (resolver_tests)
//! - The topology walk end to end (topology_tests)
//! - Concurrent resolution of shared singletons (concurrency_tests)

mod concurrency_tests;
mod resolver_tests;

use wgb_domain::value_objects::{ConfigAisle, ConfigConnection, ConfigShuttle, TopologyConfig};

/// Two connections, two aisles with two shuttles each
///
/// Shuttle (1,1) uses connection 2, every other shuttle uses connection 1.
pub fn warehouse_topology() -> TopologyConfig {
    TopologyConfig::new()
        .with_connection(ConfigConnection::new(1))
        .with_connection(ConfigConnection::new(2))
        .with_aisle(
            ConfigAisle::new(1)
                .with_shuttle(ConfigShuttle::new(1, 1, 2))
                .with_shuttle(ConfigShuttle::new(2, 2, 1)),
        )
        .with_aisle(
            ConfigAisle::new(2)
                .with_shuttle(ConfigShuttle::new(3, 1, 1))
                .with_shuttle(ConfigShuttle::new(4, 2, 1)),
        )
}

/// Factory invocations needed for the whole warehouse: 2 connections,
/// 2 aisles, 4 shuttles and the app
pub const WAREHOUSE_FACTORIES: usize = 9;

/// Bindings in the warehouse graph, including three private slots per shuttle
pub const WAREHOUSE_BINDINGS: usize = 21;
