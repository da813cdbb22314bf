//! # Domain Layer
//!
//! Core types for the warehouse graph builder. Nothing in this crate knows how
//! the object graph is wired; it only describes *what* gets wired.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Identities and the topology configuration they are derived from |
//! | [`entities`] | Leaf objects constructed by the graph (App, Aisle, Shuttle, Connection) |
//! | [`error`] | Graph construction errors and the crate-wide error type |
//! | [`constants`] | Well-known names used for qualified identities |

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Aisle, App, Connection, Shuttle};
pub use error::{Error, GraphError, Result};
pub use value_objects::{
    ConfigAisle, ConfigConnection, ConfigShuttle, Discriminator, Identity, IdentityKind,
    TopologyConfig,
};
