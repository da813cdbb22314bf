//! Graph builder - the single-owner construction context
//!
//! All registration happens on a [`GraphBuilder`]. [`GraphBuilder::build`]
//! validates the binding table and consumes the builder, so nothing can be
//! registered once resolution is possible.
//!
//! ```text
//! GraphBuilder::new()
//!     ├── child_scope / bind / expose / aggregator / contribute   (walk)
//!     └── build()  ── validate visibility of every argument ──► ObjectGraph
//! ```

use std::any::Any;

use tracing::{debug, info};
use wgb_domain::error::GraphError;
use wgb_domain::value_objects::{Identity, IdentityKind};

use super::aggregator::AggregatorTarget;
use super::binding::{Binding, Recipe};
use super::modules::GraphModule;
use super::resolver::ObjectGraph;
use super::scope::{Entry, ScopeId, ScopeTree};

/// Collects scopes, bindings and aggregators before the graph is frozen
#[derive(Debug)]
pub struct GraphBuilder {
    tree: ScopeTree,
    /// Registration order, for deterministic validation and description
    order: Vec<Identity>,
}

impl GraphBuilder {
    /// Create a builder holding only the root scope
    pub fn new() -> Self {
        Self {
            tree: ScopeTree::new(),
            order: Vec::new(),
        }
    }

    /// The global root scope
    pub fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    /// Create a scope nested under `parent`
    pub fn child_scope(&mut self, parent: ScopeId, label: &str) -> Result<ScopeId, GraphError> {
        let scope = self.tree.add_child(parent, label)?;
        let node = self.tree.node(scope)?;
        debug!(scope = node.label(), "Created scope");
        Ok(scope)
    }

    /// Bind `identity` in `scope` with a recipe and its argument identities
    pub fn bind(
        &mut self,
        scope: ScopeId,
        identity: Identity,
        recipe: Recipe,
        args: Vec<Identity>,
    ) -> Result<(), GraphError> {
        self.tree.claim(scope, &identity)?;
        let node = self.tree.node(scope)?;
        debug!(
            scope = node.label(),
            identity = %identity,
            recipe = recipe.kind(),
            args = args.len(),
            "Bound identity"
        );
        let binding = Binding::new(identity.clone(), scope, recipe, args);
        self.tree
            .node_mut(scope)?
            .bindings
            .insert(identity.clone(), binding);
        self.order.push(identity);
        Ok(())
    }

    /// Bind a ready value in `scope`
    pub fn bind_value<T: Any + Send + Sync>(
        &mut self,
        scope: ScopeId,
        identity: Identity,
        value: T,
    ) -> Result<(), GraphError> {
        self.bind(scope, identity, Recipe::value(value), Vec::new())
    }

    /// Bind `identity` in `scope` as a cross-reference to `target`
    ///
    /// The target must already be visible from `scope`; a dangling
    /// cross-reference fails here rather than at resolution.
    pub fn bind_alias(
        &mut self,
        scope: ScopeId,
        identity: Identity,
        target: Identity,
    ) -> Result<(), GraphError> {
        self.tree.lookup(scope, &target)?;
        self.bind(scope, identity, Recipe::Alias, vec![target])
    }

    /// Expose `identity` from `scope` to its parent
    pub fn expose(&mut self, scope: ScopeId, identity: &Identity) -> Result<(), GraphError> {
        self.tree.expose(scope, identity)?;
        let node = self.tree.node(scope)?;
        debug!(
            scope = node.label(),
            identity = %identity,
            "Exposed identity"
        );
        Ok(())
    }

    /// Declare an aggregator collecting identities of `member_kind`
    pub fn aggregator(
        &mut self,
        scope: ScopeId,
        identity: Identity,
        member_kind: IdentityKind,
    ) -> Result<(), GraphError> {
        self.tree.claim(scope, &identity)?;
        let node = self.tree.node(scope)?;
        debug!(
            scope = node.label(),
            identity = %identity,
            member_kind = %member_kind,
            "Declared aggregator"
        );
        let target = AggregatorTarget::new(identity.clone(), member_kind, scope);
        self.tree
            .node_mut(scope)?
            .aggregators
            .insert(identity.clone(), target);
        self.order.push(identity);
        Ok(())
    }

    /// Add `member` to the aggregator named `aggregator`
    pub fn contribute(&mut self, aggregator: &Identity, member: Identity) -> Result<(), GraphError> {
        let Some(scope) = self.tree.owner_of(aggregator) else {
            return Err(GraphError::unresolved(aggregator.clone(), self.tree.root_label()));
        };
        let Some(target) = self.tree.node_mut(scope)?.aggregators.get_mut(aggregator) else {
            return Err(GraphError::NotAnAggregator {
                identity: aggregator.clone(),
            });
        };
        target.contribute(member)
    }

    /// Run a module's registrations against this builder
    pub fn install(&mut self, module: &dyn GraphModule) -> Result<(), GraphError> {
        debug!(module = module.name(), "Installing module");
        module.configure(self)
    }

    /// Visibility check against the bindings registered so far
    pub fn lookup(&self, scope: ScopeId, identity: &Identity) -> Result<ScopeId, GraphError> {
        self.tree.lookup(scope, identity)
    }

    /// Number of registered identities (bindings and aggregators)
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Validate and freeze
    ///
    /// Every binding argument must be visible from the binding's scope and
    /// every aggregator contribution from the aggregator's scope. The first
    /// violation, in registration order, aborts the build.
    pub fn build(self) -> Result<ObjectGraph, GraphError> {
        for identity in &self.order {
            match self.tree.entry(identity) {
                Some(Entry::Binding(binding)) => {
                    for arg in binding.args() {
                        self.tree.lookup(binding.scope(), arg)?;
                    }
                }
                Some(Entry::Aggregator(target)) => {
                    for member in target.contributions() {
                        self.tree.lookup(target.scope(), member)?;
                    }
                }
                None => {
                    return Err(GraphError::unresolved(identity.clone(), self.tree.root_label()));
                }
            }
        }

        info!(
            scopes = self.tree.len(),
            identities = self.order.len(),
            "Object graph validated"
        );
        Ok(ObjectGraph::new(self.tree, self.order))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
