//! Object graph builder
//!
//! Scoped, configuration-driven wiring of singletons.
//!
//! ```text
//! TopologyConfig
//!      │  TopologyModule::configure
//!      ▼
//! GraphBuilder ── scopes, bindings, aggregators ── build() ──► ObjectGraph
//!                                                               │
//!                                    resolve / resolve_collection
//!                                                               ▼
//!                                                     Arc<App>, Arc<Shuttle>, ...
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`scope`] | Scope tree and the visibility rule |
//! | [`binding`] | Bindings, recipes and typed factory arguments |
//! | [`aggregator`] | Multi-value collection targets |
//! | [`builder`] | Registration context, frozen by `build` |
//! | [`resolver`] | Singleton cache, cycle detection, per-identity locking |
//! | [`description`] | Serializable inventory for diagnostics |
//! | [`modules`] | Registration units, including the topology walk |

pub mod aggregator;
pub mod binding;
pub mod builder;
pub mod description;
pub mod modules;
pub mod resolver;
pub mod scope;

pub use aggregator::AggregatorTarget;
pub use binding::{Arguments, Binding, Instance, Lifetime, Recipe};
pub use builder::GraphBuilder;
pub use description::{
    AggregatorDescription, BindingDescription, GraphDescription, ScopeDescription,
};
pub use modules::{
    GraphModule, TopologyGraphExt, TopologyModule, build_from_config, build_object_graph,
};
pub use resolver::{ObjectGraph, ResolutionState};
pub use scope::{ScopeId, ScopeNode, ScopeTree};
