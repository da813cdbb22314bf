//! Topology configuration
//!
//! Plain data describing which aisles, shuttles and connections exist. The
//! graph builder walks this once and derives every identity from it.

use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Source datum for one connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigConnection {
    /// Connection number
    pub num: i64,
}

impl ConfigConnection {
    /// Create a connection datum
    pub fn new(num: i64) -> Self {
        Self { num }
    }

    /// `(Connection, [num])`
    pub fn identity(&self) -> Identity {
        Identity::connection(self.num)
    }
}

/// Source datum for one shuttle inside an aisle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigShuttle {
    /// Bookkeeping id, not part of the identity
    #[serde(default)]
    pub id: i64,

    /// Shuttle number, unique within its aisle
    pub num: i64,

    /// Number of the connection this shuttle uses
    #[serde(alias = "connNum")]
    pub conn_num: i64,
}

impl ConfigShuttle {
    /// Create a shuttle datum
    pub fn new(id: i64, num: i64, conn_num: i64) -> Self {
        Self { id, num, conn_num }
    }

    /// `(Shuttle, [aisle_num, num])`
    pub fn identity(&self, aisle_num: i64) -> Identity {
        Identity::shuttle(aisle_num, self.num)
    }

    /// `(Connection, [conn_num])`
    pub fn connection_identity(&self) -> Identity {
        Identity::connection(self.conn_num)
    }
}

/// Source datum for one aisle and its shuttles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigAisle {
    /// Aisle number
    pub num: i64,

    /// Shuttles placed in this aisle
    #[serde(default)]
    pub shuttles: Vec<ConfigShuttle>,
}

impl ConfigAisle {
    /// Create an aisle datum without shuttles
    pub fn new(num: i64) -> Self {
        Self {
            num,
            shuttles: Vec::new(),
        }
    }

    /// Add a shuttle
    pub fn with_shuttle(mut self, shuttle: ConfigShuttle) -> Self {
        self.shuttles.push(shuttle);
        self
    }

    /// `(Aisle, [num])`
    pub fn identity(&self) -> Identity {
        Identity::aisle(self.num)
    }
}

/// The whole topology handed to the graph builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Connections, bound in the root scope
    #[serde(default)]
    pub connections: Vec<ConfigConnection>,

    /// Aisles, each with its own scope
    #[serde(default)]
    pub aisles: Vec<ConfigAisle>,
}

impl TopologyConfig {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection
    pub fn with_connection(mut self, connection: ConfigConnection) -> Self {
        self.connections.push(connection);
        self
    }

    /// Add an aisle
    pub fn with_aisle(mut self, aisle: ConfigAisle) -> Self {
        self.aisles.push(aisle);
        self
    }

    /// Copy ordered by discriminator at every level
    ///
    /// Sibling order in the source data carries no meaning, so callers that
    /// need reproducible aggregation order sort first.
    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.connections.sort_by_key(|c| c.num);
        sorted.aisles.sort_by_key(|a| a.num);
        for aisle in &mut sorted.aisles {
            aisle.shuttles.sort_by_key(|s| s.num);
        }
        sorted
    }

    /// Total number of shuttles across all aisles
    pub fn shuttle_count(&self) -> usize {
        self.aisles.iter().map(|a| a.shuttles.len()).sum()
    }
}
