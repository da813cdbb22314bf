//! # Infrastructure Layer
//!
//! Wiring, configuration and observability for the warehouse graph builder.
//!
//! ## Module Categories
//!
//! ### Object Graph
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Scoped binding table, aggregators and the singleton resolver |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{GraphBuilder, ObjectGraph, TopologyGraphExt};
pub use error_ext::ErrorContext;
