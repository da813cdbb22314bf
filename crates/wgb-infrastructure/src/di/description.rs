//! Serializable inventory of a built graph
//!
//! Used by `wgb inspect` and by tests that assert on graph shape without
//! resolving anything.

use serde::Serialize;
use wgb_domain::value_objects::Identity;

use super::scope::{Entry, ScopeId, ScopeTree};

/// One binding as rendered text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDescription {
    pub identity: String,
    pub recipe: &'static str,
    pub args: Vec<String>,
}

/// One aggregator as rendered text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatorDescription {
    pub identity: String,
    pub member_kind: String,
    pub contributions: Vec<String>,
}

/// One scope with what it declares and exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeDescription {
    pub id: ScopeId,
    pub label: String,
    pub parent: Option<ScopeId>,
    pub bindings: Vec<BindingDescription>,
    pub aggregators: Vec<AggregatorDescription>,
    pub exposed: Vec<String>,
}

/// Whole-graph inventory, scopes in creation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub scopes: Vec<ScopeDescription>,
}

impl GraphDescription {
    pub(crate) fn from_tree(tree: &ScopeTree, order: &[Identity]) -> Self {
        let mut scopes: Vec<ScopeDescription> = tree
            .scopes()
            .map(|node| ScopeDescription {
                id: node.id(),
                label: node.label().to_string(),
                parent: node.parent(),
                bindings: Vec::new(),
                aggregators: Vec::new(),
                exposed: Vec::new(),
            })
            .collect();

        for identity in order {
            let Some(owner) = tree.owner_of(identity) else {
                continue;
            };
            let scope = &mut scopes[owner.index()];
            match tree.entry(identity) {
                Some(Entry::Binding(binding)) => scope.bindings.push(BindingDescription {
                    identity: identity.to_string(),
                    recipe: binding.recipe().kind(),
                    args: binding.args().iter().map(ToString::to_string).collect(),
                }),
                Some(Entry::Aggregator(target)) => scope.aggregators.push(AggregatorDescription {
                    identity: identity.to_string(),
                    member_kind: target.member_kind().to_string(),
                    contributions: target
                        .contributions()
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                }),
                None => {}
            }
        }

        for node in tree.scopes() {
            scopes[node.id().index()].exposed = order
                .iter()
                .filter(|identity| node.is_exposed(identity))
                .map(ToString::to_string)
                .collect();
        }

        Self { scopes }
    }

    /// Total number of bindings across all scopes
    pub fn binding_count(&self) -> usize {
        self.scopes.iter().map(|s| s.bindings.len()).sum()
    }

    /// Scope description by label
    pub fn scope(&self, label: &str) -> Option<&ScopeDescription> {
        self.scopes.iter().find(|s| s.label == label)
    }
}
