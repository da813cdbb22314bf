//! Topology module - the configuration walk
//!
//! Turns a [`TopologyConfig`] into scopes, bindings and aggregators in one
//! pass:
//!
//! ```text
//! root
//! ├── (Connection,[n])            contributed to "connections"
//! ├── aisle[a]                    exposes (Aisle,[a]) and its shuttles
//! │   ├── (Aisle,[a])             args: ("shuttles",a)
//! │   ├── ("shuttles",a)          aisle-local aggregator
//! │   └── shuttle[a,s]            exposes (Shuttle,[a,s])
//! │       ├── ("aisleNum",a,s)    private value
//! │       ├── ("num",a,s)         private value
//! │       ├── ("conn",a,s)        private alias -> (Connection,[connNum])
//! │       └── (Shuttle,[a,s])     args: aisleNum, num, conn
//! ├── "aisles" / "connections" / "allShuttles" aggregators
//! └── "app"                       args: aisles, connections
//! ```

use std::sync::Arc;

use tracing::{debug, info};
use wgb_domain::entities::{Aisle, App, Connection, Shuttle};
use wgb_domain::error::{GraphError, Result};
use wgb_domain::value_objects::{
    ConfigAisle, ConfigConnection, ConfigShuttle, Identity, IdentityKind, TopologyConfig,
};

use super::traits::GraphModule;
use crate::config::AppConfig;
use crate::di::builder::GraphBuilder;
use crate::di::binding::{Recipe, downcast};
use crate::di::resolver::ObjectGraph;
use crate::di::scope::ScopeId;

/// Registers the aisle/shuttle/connection topology
#[derive(Debug, Clone)]
pub struct TopologyModule {
    topology: TopologyConfig,
}

impl TopologyModule {
    /// Walk the topology in the order given
    pub fn new(topology: TopologyConfig) -> Self {
        Self { topology }
    }

    /// Walk the topology ordered by discriminator
    pub fn sorted(topology: &TopologyConfig) -> Self {
        Self::new(topology.sorted())
    }

    pub fn topology(&self) -> &TopologyConfig {
        &self.topology
    }

    fn bind_connection(
        builder: &mut GraphBuilder,
        root: ScopeId,
        connection: &ConfigConnection,
    ) -> std::result::Result<(), GraphError> {
        let identity = connection.identity();
        let num = connection.num;
        builder.bind(
            root,
            identity.clone(),
            Recipe::factory(move |_| Ok(Connection::new(num))),
            Vec::new(),
        )?;
        builder.contribute(&Identity::connections(), identity)
    }

    fn bind_aisle(
        builder: &mut GraphBuilder,
        root: ScopeId,
        aisle: &ConfigAisle,
    ) -> std::result::Result<(), GraphError> {
        let scope = builder.child_scope(root, &format!("aisle[{}]", aisle.num))?;
        let identity = aisle.identity();
        let shuttles = Identity::aisle_shuttles(aisle.num);
        let num = aisle.num;

        builder.bind(
            scope,
            identity.clone(),
            Recipe::factory(move |args| Ok(Aisle::new(num, args.collection::<Shuttle>(0)?))),
            vec![shuttles.clone()],
        )?;
        builder.expose(scope, &identity)?;
        builder.contribute(&Identity::aisles(), identity)?;
        builder.aggregator(scope, shuttles.clone(), IdentityKind::Shuttle)?;

        for shuttle in &aisle.shuttles {
            Self::bind_shuttle(builder, scope, aisle.num, shuttle)?;
            let shuttle_identity = shuttle.identity(aisle.num);
            builder.expose(scope, &shuttle_identity)?;
            builder.contribute(&shuttles, shuttle_identity.clone())?;
            builder.contribute(&Identity::all_shuttles(), shuttle_identity)?;
        }
        Ok(())
    }

    fn bind_shuttle(
        builder: &mut GraphBuilder,
        aisle_scope: ScopeId,
        aisle_num: i64,
        shuttle: &ConfigShuttle,
    ) -> std::result::Result<(), GraphError> {
        let scope =
            builder.child_scope(aisle_scope, &format!("shuttle[{aisle_num},{}]", shuttle.num))?;
        let identity = shuttle.identity(aisle_num);
        let aisle_slot = Identity::shuttle_aisle_num_slot(aisle_num, shuttle.num);
        let num_slot = Identity::shuttle_num_slot(aisle_num, shuttle.num);
        let connection_slot = Identity::shuttle_connection_slot(aisle_num, shuttle.num);
        debug!(id = shuttle.id, identity = %identity, "Walking shuttle");

        builder.bind(
            scope,
            identity.clone(),
            Recipe::factory(|args| {
                Ok(Shuttle::new(
                    args.value::<i64>(0)?,
                    args.value::<i64>(1)?,
                    args.single::<Connection>(2)?,
                ))
            }),
            vec![aisle_slot.clone(), num_slot.clone(), connection_slot.clone()],
        )?;
        builder.bind_value(scope, aisle_slot, aisle_num)?;
        builder.bind_value(scope, num_slot, shuttle.num)?;
        builder.bind_alias(scope, connection_slot, shuttle.connection_identity())?;
        builder.expose(scope, &identity)
    }
}

impl GraphModule for TopologyModule {
    fn name(&self) -> &'static str {
        "topology"
    }

    fn configure(&self, builder: &mut GraphBuilder) -> std::result::Result<(), GraphError> {
        let root = builder.root();
        builder.aggregator(root, Identity::connections(), IdentityKind::Connection)?;
        builder.aggregator(root, Identity::aisles(), IdentityKind::Aisle)?;
        builder.aggregator(root, Identity::all_shuttles(), IdentityKind::Shuttle)?;

        for connection in &self.topology.connections {
            Self::bind_connection(builder, root, connection)?;
        }
        for aisle in &self.topology.aisles {
            Self::bind_aisle(builder, root, aisle)?;
        }

        builder.bind(
            root,
            Identity::app(),
            Recipe::factory(|args| {
                Ok(App::new(
                    args.collection::<Aisle>(0)?,
                    args.collection::<Connection>(1)?,
                ))
            }),
            vec![Identity::aisles(), Identity::connections()],
        )
    }
}

/// Walk `topology` in discriminator order and freeze the result
pub fn build_object_graph(
    topology: &TopologyConfig,
) -> std::result::Result<ObjectGraph, GraphError> {
    let mut builder = GraphBuilder::new();
    builder.install(&TopologyModule::sorted(topology))?;
    builder.build()
}

/// Build the object graph described by the application configuration
///
/// Honors `graph.sort_siblings` and, with `graph.eager`, resolves every
/// binding before returning.
pub fn build_from_config(config: &AppConfig) -> Result<ObjectGraph> {
    info!(
        connections = config.topology.connections.len(),
        aisles = config.topology.aisles.len(),
        shuttles = config.topology.shuttle_count(),
        "Building object graph"
    );

    let module = if config.graph.sort_siblings {
        TopologyModule::sorted(&config.topology)
    } else {
        TopologyModule::new(config.topology.clone())
    };

    let mut builder = GraphBuilder::new();
    builder.install(&module)?;
    let graph = builder.build()?;

    if config.graph.eager {
        graph.resolve_all()?;
    }
    Ok(graph)
}

/// Named accessors for graphs built by [`TopologyModule`]
pub trait TopologyGraphExt {
    /// The application root
    fn app(&self) -> std::result::Result<Arc<App>, GraphError>;
    /// Every connection, in contribution order
    fn connections(&self) -> std::result::Result<Vec<Arc<Connection>>, GraphError>;
    /// Every aisle, in contribution order
    fn aisles(&self) -> std::result::Result<Vec<Arc<Aisle>>, GraphError>;
    /// Every shuttle of every aisle
    fn all_shuttles(&self) -> std::result::Result<Vec<Arc<Shuttle>>, GraphError>;
    /// The shuttles of one aisle, requested from inside that aisle's scope
    fn aisle_shuttles(&self, aisle_num: i64) -> std::result::Result<Vec<Arc<Shuttle>>, GraphError>;
    /// One connection singleton
    fn connection(&self, num: i64) -> std::result::Result<Arc<Connection>, GraphError>;
    /// One shuttle singleton
    fn shuttle(&self, aisle_num: i64, num: i64) -> std::result::Result<Arc<Shuttle>, GraphError>;
    /// Scope owned by aisle `num`
    fn aisle_scope(&self, num: i64) -> Option<ScopeId>;
    /// Scope owned by shuttle `(aisle_num, num)`
    fn shuttle_scope(&self, aisle_num: i64, num: i64) -> Option<ScopeId>;
}

impl TopologyGraphExt for ObjectGraph {
    fn app(&self) -> std::result::Result<Arc<App>, GraphError> {
        self.resolve_as(&Identity::app())
    }

    fn connections(&self) -> std::result::Result<Vec<Arc<Connection>>, GraphError> {
        self.resolve_collection_as(&Identity::connections())
    }

    fn aisles(&self) -> std::result::Result<Vec<Arc<Aisle>>, GraphError> {
        self.resolve_collection_as(&Identity::aisles())
    }

    fn all_shuttles(&self) -> std::result::Result<Vec<Arc<Shuttle>>, GraphError> {
        self.resolve_collection_as(&Identity::all_shuttles())
    }

    fn aisle_shuttles(&self, aisle_num: i64) -> std::result::Result<Vec<Arc<Shuttle>>, GraphError> {
        let aggregator = Identity::aisle_shuttles(aisle_num);
        let scope = self
            .aisle_scope(aisle_num)
            .ok_or_else(|| GraphError::unresolved(Identity::aisle(aisle_num), "root"))?;
        self.resolve_collection_in(scope, &aggregator)?
            .into_iter()
            .enumerate()
            .map(|(index, member)| downcast(&aggregator, index, member))
            .collect()
    }

    fn connection(&self, num: i64) -> std::result::Result<Arc<Connection>, GraphError> {
        self.resolve_as(&Identity::connection(num))
    }

    fn shuttle(&self, aisle_num: i64, num: i64) -> std::result::Result<Arc<Shuttle>, GraphError> {
        self.resolve_as(&Identity::shuttle(aisle_num, num))
    }

    fn aisle_scope(&self, num: i64) -> Option<ScopeId> {
        self.scope_of(&Identity::aisle(num))
    }

    fn shuttle_scope(&self, aisle_num: i64, num: i64) -> Option<ScopeId> {
        self.scope_of(&Identity::shuttle(aisle_num, num))
    }
}
