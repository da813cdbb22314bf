//! Configuration management
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`loader`] | Figment-based loading from defaults, TOML and environment |
//! | [`types`] | Serializable configuration sections |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, GraphConfig, LoggingConfig};
