//! Multi-value aggregation targets
//!
//! An aggregator is itself an identity. Requesting it yields a fresh
//! collection whose members are the cached singletons of each contributed
//! identity, in contribution order.

use wgb_domain::error::GraphError;
use wgb_domain::value_objects::{Discriminator, Identity, IdentityKind};

use super::scope::ScopeId;

/// A named collection point
#[derive(Debug, Clone)]
pub struct AggregatorTarget {
    identity: Identity,
    member_kind: IdentityKind,
    scope: ScopeId,
    contributions: Vec<Identity>,
}

impl AggregatorTarget {
    pub(crate) fn new(identity: Identity, member_kind: IdentityKind, scope: ScopeId) -> Self {
        Self {
            identity,
            member_kind,
            scope,
            contributions: Vec::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Leading string discriminator, or the rendered identity
    pub fn name(&self) -> String {
        match self.identity.discriminators().first() {
            Some(Discriminator::Str(name)) => name.clone(),
            _ => self.identity.to_string(),
        }
    }

    pub fn member_kind(&self) -> IdentityKind {
        self.member_kind
    }

    /// Scope that owns the aggregator; contributions must be visible from it
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn contributions(&self) -> &[Identity] {
        &self.contributions
    }

    pub(crate) fn contribute(&mut self, member: Identity) -> Result<(), GraphError> {
        if member.kind() != self.member_kind {
            return Err(GraphError::construction(
                self.identity.clone(),
                format!(
                    "contribution {member} is not a {} identity",
                    self.member_kind
                ),
            ));
        }
        if self.contributions.contains(&member) {
            return Err(GraphError::duplicate(member));
        }
        self.contributions.push(member);
        Ok(())
    }
}
