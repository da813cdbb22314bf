//! Module trait
//!
//! A module is a unit of registrations applied to a [`GraphBuilder`]. The
//! configuration walk is one module; tests and callers can install their own
//! alongside it before the graph is frozen.

use wgb_domain::error::GraphError;

use crate::di::builder::GraphBuilder;

/// A set of registrations installed into a builder
pub trait GraphModule: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Register scopes, bindings and aggregators
    fn configure(&self, builder: &mut GraphBuilder) -> Result<(), GraphError>;
}
