//! Configuration types module

pub mod app;
pub mod graph;
pub mod logging;

// Re-export main types
pub use app::*;
