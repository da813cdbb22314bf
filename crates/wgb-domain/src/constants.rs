//! Domain layer constants
//!
//! Names used as the leading discriminator of `Named` identities. The
//! graph builder and its callers must agree on these, so they live here
//! rather than next to the builder.

// ============================================================================
// ROOT-LEVEL NAMED IDENTITIES
// ============================================================================

/// The application root
pub const APP: &str = "app";

/// Root aggregator collecting every aisle
pub const AISLES: &str = "aisles";

/// Root aggregator collecting every connection
pub const CONNECTIONS: &str = "connections";

/// Root aggregator collecting every shuttle of every aisle
pub const ALL_SHUTTLES: &str = "allShuttles";

// ============================================================================
// SCOPE-LOCAL NAMED IDENTITIES
// ============================================================================

/// Per-aisle aggregator of that aisle's shuttles, qualified by aisle number
pub const SHUTTLES: &str = "shuttles";

/// Shuttle-private slot holding the owning aisle's number
pub const SLOT_AISLE_NUM: &str = "aisleNum";

/// Shuttle-private slot holding the shuttle's own number
pub const SLOT_NUM: &str = "num";

/// Shuttle-private slot referencing the selected connection
pub const SLOT_CONNECTION: &str = "conn";
