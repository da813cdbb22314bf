//! Error handling types

use thiserror::Error;

use crate::value_objects::Identity;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while building or resolving the object graph
///
/// Variants name the offending identity (or scope) so a malformed
/// configuration can be fixed without guessing. These are cheap to clone because a failed
/// identity keeps its error and hands it back to every later request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The same identity was registered twice
    #[error("Duplicate binding: {identity}")]
    DuplicateBinding {
        /// Identity registered more than once
        identity: Identity,
    },

    /// A recipe or contribution names an identity that is bound nowhere
    #[error("Unresolved reference: {identity} (required in scope {scope})")]
    UnresolvedReference {
        /// Identity that could not be found
        identity: Identity,
        /// Label of the scope that needed it
        scope: String,
    },

    /// Resolution reached an identity that is still being resolved
    #[error("Cyclic dependency: {}", format_cycle(.cycle))]
    CyclicDependency {
        /// The cycle, starting and ending with the same identity
        cycle: Vec<Identity>,
    },

    /// An identity exists but is private to a scope the requester cannot see
    #[error("Visibility violation: {identity} is not visible from scope {scope}")]
    VisibilityViolation {
        /// Identity that is bound but not exposed to the requester
        identity: Identity,
        /// Label of the scope the lookup started from
        scope: String,
    },

    /// A scope id that was not created by this builder or graph
    #[error("Unknown scope #{index}: not part of this graph")]
    UnknownScope {
        /// Arena index carried by the foreign scope id
        index: usize,
    },

    /// A recipe received arguments of the wrong shape
    #[error("Construction of {identity} failed: {message}")]
    Construction {
        /// Identity whose recipe failed
        identity: Identity,
        /// What went wrong
        message: String,
    },

    /// A single instance was requested from an aggregator identity
    #[error("{identity} is an aggregator; request it as a collection")]
    NotASingle {
        /// The aggregator identity
        identity: Identity,
    },

    /// A collection was requested from a non-aggregator identity
    #[error("{identity} is not an aggregator")]
    NotAnAggregator {
        /// The non-aggregator identity
        identity: Identity,
    },
}

fn format_cycle(cycle: &[Identity]) -> String {
    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl GraphError {
    /// Create a duplicate binding error
    pub fn duplicate(identity: Identity) -> Self {
        Self::DuplicateBinding { identity }
    }

    /// Create an unresolved reference error
    pub fn unresolved<S: Into<String>>(identity: Identity, scope: S) -> Self {
        Self::UnresolvedReference {
            identity,
            scope: scope.into(),
        }
    }

    /// Create a visibility violation error
    pub fn not_visible<S: Into<String>>(identity: Identity, scope: S) -> Self {
        Self::VisibilityViolation {
            identity,
            scope: scope.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cycle(cycle: Vec<Identity>) -> Self {
        Self::CyclicDependency { cycle }
    }

    /// Create an unknown scope error
    pub fn unknown_scope(index: usize) -> Self {
        Self::UnknownScope { index }
    }

    /// Create a construction error
    pub fn construction<S: Into<String>>(identity: Identity, message: S) -> Self {
        Self::Construction {
            identity,
            message: message.into(),
        }
    }

    /// The identity this error is about
    ///
    /// For a cycle this is the identity that closed it.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::DuplicateBinding { identity }
            | Self::UnresolvedReference { identity, .. }
            | Self::VisibilityViolation { identity, .. }
            | Self::Construction { identity, .. }
            | Self::NotASingle { identity }
            | Self::NotAnAggregator { identity } => Some(identity),
            Self::CyclicDependency { cycle } => cycle.last(),
            Self::UnknownScope { .. } => None,
        }
    }
}

/// Main error type for the warehouse graph builder
#[derive(Error, Debug)]
pub enum Error {
    /// Object graph construction or resolution failed
    #[error("Object graph error: {0}")]
    Graph(#[from] GraphError),

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and internal error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The graph error inside, if this is one
    pub fn as_graph(&self) -> Option<&GraphError> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}
