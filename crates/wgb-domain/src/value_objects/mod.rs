//! Domain Value Objects
//!
//! Immutable values compared by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Identity`] | Qualified key naming one entity in the object graph |
//! | [`TopologyConfig`] | Aisles, shuttles and connections to wire |

/// Qualified identities
pub mod identity;
/// Topology configuration data
pub mod topology;

pub use identity::{Discriminator, Identity, IdentityKind};
pub use topology::{ConfigAisle, ConfigConnection, ConfigShuttle, TopologyConfig};
