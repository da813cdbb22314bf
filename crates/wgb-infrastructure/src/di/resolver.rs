//! Object graph resolver and instance cache
//!
//! [`ObjectGraph`] is the frozen binding table plus one cache slot per
//! binding. Resolving an identity:
//!
//! 1. checks visibility from the requesting scope,
//! 2. walks the argument relation depth-first to reject cycles before any
//!    construction starts,
//! 3. constructs arguments left to right, then the identity itself, each
//!    behind its slot's `OnceCell`.
//!
//! The cell serialises construction per identity: a concurrent request for an
//! identity under construction blocks until the first one finishes, then sees
//! the same instance. Failures are sticky.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};
use wgb_domain::error::GraphError;
use wgb_domain::value_objects::Identity;

use super::binding::{Arguments, Instance, Recipe, Resolved, downcast};
use super::description::GraphDescription;
use super::scope::{Entry, ScopeId, ScopeTree};

/// Per-identity resolution state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// Never requested
    Unvisited,
    /// Construction in progress
    Resolving,
    /// Instance cached
    Resolved,
    /// Construction failed; the error is replayed on every request
    Failed,
}

const UNVISITED: u8 = 0;
const RESOLVING: u8 = 1;
const RESOLVED: u8 = 2;
const FAILED: u8 = 3;

impl ResolutionState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            RESOLVING => Self::Resolving,
            RESOLVED => Self::Resolved,
            FAILED => Self::Failed,
            _ => Self::Unvisited,
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    state: AtomicU8,
    instance: OnceCell<Instance>,
    failure: OnceCell<GraphError>,
}

impl Slot {
    fn set_state(&self, state: u8) {
        self.state.store(state, Ordering::Release);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Frozen, validated object graph with a lazily filled singleton cache
#[derive(Debug)]
pub struct ObjectGraph {
    tree: ScopeTree,
    order: Vec<Identity>,
    slots: HashMap<Identity, Slot>,
    constructions: AtomicUsize,
}

impl ObjectGraph {
    pub(crate) fn new(tree: ScopeTree, order: Vec<Identity>) -> Self {
        let slots = order
            .iter()
            .filter(|identity| matches!(tree.entry(identity), Some(Entry::Binding(_))))
            .map(|identity| (identity.clone(), Slot::default()))
            .collect();
        Self {
            tree,
            order,
            slots,
            constructions: AtomicUsize::new(0),
        }
    }

    /// Resolve a singleton visible from the root scope
    pub fn resolve(&self, identity: &Identity) -> Result<Instance, GraphError> {
        self.resolve_in(ScopeId::ROOT, identity)
    }

    /// Resolve a singleton visible from `scope`
    pub fn resolve_in(&self, scope: ScopeId, identity: &Identity) -> Result<Instance, GraphError> {
        self.tree.lookup(scope, identity)?;
        if let Some(Entry::Aggregator(_)) = self.tree.entry(identity) {
            return Err(GraphError::NotASingle {
                identity: identity.clone(),
            });
        }
        self.ensure_acyclic(identity)?;
        self.instantiate(identity)
    }

    /// Resolve a singleton and downcast it
    pub fn resolve_as<T: Any + Send + Sync>(&self, identity: &Identity) -> Result<Arc<T>, GraphError> {
        let instance = self.resolve(identity)?;
        instance.downcast::<T>().map_err(|_| {
            GraphError::construction(
                identity.clone(),
                format!("instance is not a {}", type_name::<T>()),
            )
        })
    }

    /// Assemble an aggregator visible from the root scope
    ///
    /// Each call returns a new collection; its members are the cached
    /// singletons.
    pub fn resolve_collection(&self, aggregator: &Identity) -> Result<Vec<Instance>, GraphError> {
        self.resolve_collection_in(ScopeId::ROOT, aggregator)
    }

    /// Assemble an aggregator visible from `scope`
    pub fn resolve_collection_in(
        &self,
        scope: ScopeId,
        aggregator: &Identity,
    ) -> Result<Vec<Instance>, GraphError> {
        self.tree.lookup(scope, aggregator)?;
        let Some(Entry::Aggregator(_)) = self.tree.entry(aggregator) else {
            return Err(GraphError::NotAnAggregator {
                identity: aggregator.clone(),
            });
        };
        self.ensure_acyclic(aggregator)?;
        self.collect(aggregator)
    }

    /// Assemble an aggregator and downcast every member
    pub fn resolve_collection_as<T: Any + Send + Sync>(
        &self,
        aggregator: &Identity,
    ) -> Result<Vec<Arc<T>>, GraphError> {
        self.resolve_collection(aggregator)?
            .into_iter()
            .enumerate()
            .map(|(index, member)| downcast(aggregator, index, member))
            .collect()
    }

    /// Resolve every binding in registration order
    pub fn resolve_all(&self) -> Result<usize, GraphError> {
        for identity in self.order.iter().filter(|id| self.slots.contains_key(*id)) {
            self.ensure_acyclic(identity)?;
            self.instantiate(identity)?;
        }
        info!(resolved = self.resolved_count(), "Resolved all bindings");
        Ok(self.resolved_count())
    }

    /// Owner of `identity` if it is visible from `scope`
    pub fn lookup(&self, scope: ScopeId, identity: &Identity) -> Result<ScopeId, GraphError> {
        self.tree.lookup(scope, identity)
    }

    /// Scope that owns `identity`
    pub fn scope_of(&self, identity: &Identity) -> Option<ScopeId> {
        self.tree.owner_of(identity)
    }

    /// Resolution state of a binding; `None` for aggregators and unknown identities
    pub fn state(&self, identity: &Identity) -> Option<ResolutionState> {
        self.slots
            .get(identity)
            .map(|slot| ResolutionState::from_raw(slot.state.load(Ordering::Acquire)))
    }

    /// Number of cached instances
    pub fn resolved_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.instance.get().is_some())
            .count()
    }

    /// Number of factory invocations so far
    pub fn construction_count(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.tree
    }

    /// Identities in registration order
    pub fn identities(&self) -> &[Identity] {
        &self.order
    }

    /// Serializable inventory of scopes, bindings and aggregators
    pub fn describe(&self) -> GraphDescription {
        GraphDescription::from_tree(&self.tree, &self.order)
    }

    /// Reject a cycle reachable from `start` before constructing anything
    ///
    /// Already resolved identities are skipped: their dependencies were
    /// checked when they were built.
    fn ensure_acyclic(&self, start: &Identity) -> Result<(), GraphError> {
        let mut marks = HashMap::new();
        let mut path = Vec::new();
        self.visit(start, &mut marks, &mut path)
    }

    fn visit<'g>(
        &'g self,
        identity: &'g Identity,
        marks: &mut HashMap<&'g Identity, Mark>,
        path: &mut Vec<&'g Identity>,
    ) -> Result<(), GraphError> {
        match marks.get(identity) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = path.iter().position(|id| *id == identity).unwrap_or(0);
                let mut cycle: Vec<Identity> = path[start..].iter().map(|id| (*id).clone()).collect();
                cycle.push(identity.clone());
                warn!(cycle = ?cycle, "Cyclic dependency detected");
                return Err(GraphError::cycle(cycle));
            }
            None => {}
        }
        if self.state(identity) == Some(ResolutionState::Resolved) {
            marks.insert(identity, Mark::Done);
            return Ok(());
        }

        let next: &[Identity] = match self.tree.entry(identity) {
            Some(Entry::Binding(binding)) => binding.args(),
            Some(Entry::Aggregator(target)) => target.contributions(),
            None => &[],
        };
        marks.insert(identity, Mark::Visiting);
        path.push(identity);
        for dependency in next {
            self.visit(dependency, marks, path)?;
        }
        path.pop();
        marks.insert(identity, Mark::Done);
        Ok(())
    }

    fn argument(&self, identity: &Identity) -> Result<Resolved, GraphError> {
        match self.tree.entry(identity) {
            Some(Entry::Aggregator(_)) => self.collect(identity).map(Resolved::Collection),
            _ => self.instantiate(identity).map(Resolved::Single),
        }
    }

    fn collect(&self, aggregator: &Identity) -> Result<Vec<Instance>, GraphError> {
        let Some(Entry::Aggregator(target)) = self.tree.entry(aggregator) else {
            return Err(GraphError::NotAnAggregator {
                identity: aggregator.clone(),
            });
        };
        target
            .contributions()
            .iter()
            .map(|member| self.instantiate(member))
            .collect()
    }

    fn instantiate(&self, identity: &Identity) -> Result<Instance, GraphError> {
        let (Some(slot), Some(Entry::Binding(binding))) =
            (self.slots.get(identity), self.tree.entry(identity))
        else {
            return Err(GraphError::unresolved(identity.clone(), self.tree.root_label()));
        };

        if let Some(instance) = slot.instance.get() {
            return Ok(Arc::clone(instance));
        }
        if let Some(error) = slot.failure.get() {
            return Err(error.clone());
        }

        let instance = slot.instance.get_or_try_init(|| {
            // A waiter that lost the race to a failed construction lands here
            if let Some(error) = slot.failure.get() {
                return Err(error.clone());
            }
            slot.set_state(RESOLVING);
            debug!(identity = %identity, recipe = binding.recipe().kind(), "Resolving");

            let built = binding
                .args()
                .iter()
                .map(|arg| self.argument(arg))
                .collect::<Result<Vec<_>, _>>()
                .and_then(|values| self.construct(identity, binding.recipe(), values));

            match built {
                Ok(instance) => {
                    slot.set_state(RESOLVED);
                    Ok(instance)
                }
                Err(error) => {
                    let _ = slot.failure.set(error.clone());
                    slot.set_state(FAILED);
                    warn!(identity = %identity, error = %error, "Resolution failed");
                    Err(error)
                }
            }
        })?;
        Ok(Arc::clone(instance))
    }

    fn construct(
        &self,
        identity: &Identity,
        recipe: &Recipe,
        values: Vec<Resolved>,
    ) -> Result<Instance, GraphError> {
        match recipe {
            Recipe::Factory(factory) => {
                self.constructions.fetch_add(1, Ordering::Relaxed);
                factory(&Arguments::new(identity, values))
            }
            Recipe::Value(value) => Ok(Arc::clone(value)),
            Recipe::Alias => match values.into_iter().next() {
                Some(Resolved::Single(target)) => Ok(target),
                _ => Err(GraphError::construction(
                    identity.clone(),
                    "alias must reference a single instance",
                )),
            },
        }
    }
}
