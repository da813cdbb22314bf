//! Scope nodes and the visibility rule
//!
//! Scopes form a tree rooted at [`ScopeId::ROOT`]. Every identity is owned by
//! exactly one scope. An identity is visible from scope `N` when it is bound in
//! `N`, or exposed into `N` by a child (re-exposure chains carry it further
//! up), or visible by the same rule from an ancestor of `N`. Siblings never
//! see each other's unexposed bindings. Anything exposed all the way to the
//! root is visible everywhere, so aisle 1 can name aisle 2's shuttles.
//!
//! A [`ScopeId`] is only meaningful in the tree that issued it; any other id
//! fails with [`GraphError::UnknownScope`].
//!
//! Parents are referenced by arena index, so the tree has no reference
//! cycles and is dropped as one unit with the graph.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use wgb_domain::error::GraphError;
use wgb_domain::value_objects::Identity;

use super::aggregator::AggregatorTarget;
use super::binding::Binding;
use crate::constants::ROOT_SCOPE_LABEL;

/// Index of a scope inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global root scope
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A namespace holding local bindings and the subset exposed to its parent
#[derive(Debug)]
pub struct ScopeNode {
    pub(crate) id: ScopeId,
    pub(crate) parent: Option<ScopeId>,
    pub(crate) label: String,
    pub(crate) bindings: HashMap<Identity, Binding>,
    pub(crate) aggregators: HashMap<Identity, AggregatorTarget>,
    pub(crate) exposed: HashSet<Identity>,
    /// Identities exposed into this scope by a child, with their owner
    pub(crate) imported: HashMap<Identity, ScopeId>,
}

impl ScopeNode {
    fn new(id: ScopeId, parent: Option<ScopeId>, label: String) -> Self {
        Self {
            id,
            parent,
            label,
            bindings: HashMap::new(),
            aggregators: HashMap::new(),
            exposed: HashSet::new(),
            imported: HashMap::new(),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Slash-separated path from the root, e.g. `root/aisle[1]/shuttle[1,2]`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `identity` is declared in this scope
    pub fn is_local(&self, identity: &Identity) -> bool {
        self.bindings.contains_key(identity) || self.aggregators.contains_key(identity)
    }

    pub fn is_exposed(&self, identity: &Identity) -> bool {
        self.exposed.contains(identity)
    }

    /// Where `identity` comes from if this scope can name it without
    /// consulting ancestors
    fn provider_of(&self, identity: &Identity) -> Option<ScopeId> {
        if self.is_local(identity) {
            Some(self.id)
        } else {
            self.imported.get(identity).copied()
        }
    }
}

/// Referenced entry of the binding table
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    /// An ordinary singleton binding
    Binding(&'a Binding),
    /// A multi-value aggregation target
    Aggregator(&'a AggregatorTarget),
}

/// Arena of scopes plus the process-wide owner index
#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<ScopeNode>,
    owners: HashMap<Identity, ScopeId>,
}

impl ScopeTree {
    pub(crate) fn new() -> Self {
        Self {
            scopes: vec![ScopeNode::new(
                ScopeId::ROOT,
                None,
                ROOT_SCOPE_LABEL.to_string(),
            )],
            owners: HashMap::new(),
        }
    }

    pub(crate) fn add_child(
        &mut self,
        parent: ScopeId,
        label: &str,
    ) -> Result<ScopeId, GraphError> {
        let label = format!("{}/{}", self.node(parent)?.label, label);
        let id = ScopeId(self.scopes.len());
        self.scopes.push(ScopeNode::new(id, Some(parent), label));
        Ok(id)
    }

    pub fn node(&self, id: ScopeId) -> Result<&ScopeNode, GraphError> {
        self.scopes.get(id.0).ok_or_else(|| GraphError::unknown_scope(id.0))
    }

    pub(crate) fn node_mut(&mut self, id: ScopeId) -> Result<&mut ScopeNode, GraphError> {
        self.scopes
            .get_mut(id.0)
            .ok_or_else(|| GraphError::unknown_scope(id.0))
    }

    /// Label of the root scope, always present
    pub(crate) fn root_label(&self) -> &str {
        &self.scopes[ScopeId::ROOT.0].label
    }

    pub fn scopes(&self) -> impl Iterator<Item = &ScopeNode> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Owning scope of `identity`, regardless of visibility
    pub fn owner_of(&self, identity: &Identity) -> Option<ScopeId> {
        self.owners.get(identity).copied()
    }

    /// Record `identity` as owned by `scope`
    ///
    /// Fails if `scope` is unknown or any scope already owns it.
    pub(crate) fn claim(&mut self, scope: ScopeId, identity: &Identity) -> Result<(), GraphError> {
        self.node(scope)?;
        if self.owners.contains_key(identity) {
            return Err(GraphError::duplicate(identity.clone()));
        }
        self.owners.insert(identity.clone(), scope);
        Ok(())
    }

    /// Binding table entry for `identity`, regardless of visibility
    pub fn entry(&self, identity: &Identity) -> Option<Entry<'_>> {
        let node = self.node(self.owner_of(identity)?).ok()?;
        if let Some(binding) = node.bindings.get(identity) {
            return Some(Entry::Binding(binding));
        }
        node.aggregators.get(identity).map(Entry::Aggregator)
    }

    /// Resolve the visibility rule: the owner of `identity` if `from` can see it
    pub fn lookup(&self, from: ScopeId, identity: &Identity) -> Result<ScopeId, GraphError> {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.node(id)?;
            if let Some(owner) = node.provider_of(identity) {
                return Ok(owner);
            }
            current = node.parent;
        }

        let label = self.node(from)?.label.clone();
        if self.owners.contains_key(identity) {
            Err(GraphError::not_visible(identity.clone(), label))
        } else {
            Err(GraphError::unresolved(identity.clone(), label))
        }
    }

    /// Expose `identity` from `scope` to its parent
    ///
    /// The scope must be able to name the identity itself: either it is
    /// bound there or a child already exposed it.
    pub(crate) fn expose(&mut self, scope: ScopeId, identity: &Identity) -> Result<(), GraphError> {
        let node = self.node(scope)?;
        let Some(owner) = node.provider_of(identity) else {
            let label = node.label.clone();
            return Err(if self.owners.contains_key(identity) {
                GraphError::not_visible(identity.clone(), label)
            } else {
                GraphError::unresolved(identity.clone(), label)
            });
        };

        let parent = node.parent;
        self.node_mut(scope)?.exposed.insert(identity.clone());
        if let Some(parent) = parent {
            self.node_mut(parent)?.imported.insert(identity.clone(), owner);
        }
        Ok(())
    }
}
