//! Qualified identities
//!
//! An [`Identity`] names exactly one constructible entity in the object graph:
//! a kind tag plus an ordered tuple of scalar discriminators. Equality and
//! hashing are field-wise, so two identities derived from equal configuration
//! data are always equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    AISLES, ALL_SHUTTLES, APP, CONNECTIONS, SHUTTLES, SLOT_AISLE_NUM, SLOT_CONNECTION, SLOT_NUM,
};

/// Type tag of an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentityKind {
    /// A connection, discriminated by its number
    Connection,
    /// An aisle, discriminated by its number
    Aisle,
    /// A shuttle, discriminated by its aisle number and its own number
    Shuttle,
    /// Anything else: roots, aggregators and scope-private slots
    Named,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentityKind::Connection => "Connection",
            IdentityKind::Aisle => "Aisle",
            IdentityKind::Shuttle => "Shuttle",
            IdentityKind::Named => "Named",
        };
        f.write_str(name)
    }
}

/// One scalar component of an identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Discriminator {
    /// Integer discriminator
    Int(i64),
    /// String discriminator
    Str(String),
}

impl From<i64> for Discriminator {
    fn from(value: i64) -> Self {
        Discriminator::Int(value)
    }
}

impl From<&str> for Discriminator {
    fn from(value: &str) -> Self {
        Discriminator::Str(value.to_string())
    }
}

impl From<String> for Discriminator {
    fn from(value: String) -> Self {
        Discriminator::Str(value)
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::Int(n) => write!(f, "{n}"),
            Discriminator::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Qualified key: kind tag plus ordered discriminators
///
/// # Example
///
/// ```
/// use wgb_domain::value_objects::{Identity, IdentityKind};
///
/// let a = Identity::shuttle(1, 2);
/// let b = Identity::new(IdentityKind::Shuttle, [1i64.into(), 2i64.into()]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "(Shuttle,[1,2])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity {
    kind: IdentityKind,
    discriminators: Vec<Discriminator>,
}

impl Identity {
    /// Create an identity from a kind and its discriminators
    pub fn new(kind: IdentityKind, discriminators: impl IntoIterator<Item = Discriminator>) -> Self {
        Self {
            kind,
            discriminators: discriminators.into_iter().collect(),
        }
    }

    /// `(Connection, [num])`
    pub fn connection(num: i64) -> Self {
        Self::new(IdentityKind::Connection, [num.into()])
    }

    /// `(Aisle, [num])`
    pub fn aisle(num: i64) -> Self {
        Self::new(IdentityKind::Aisle, [num.into()])
    }

    /// `(Shuttle, [aisle_num, num])`
    ///
    /// The aisle number is part of the key because shuttles in different
    /// aisles may share a number.
    pub fn shuttle(aisle_num: i64, num: i64) -> Self {
        Self::new(IdentityKind::Shuttle, [aisle_num.into(), num.into()])
    }

    /// `(Named, [name])`
    pub fn named(name: &str) -> Self {
        Self::new(IdentityKind::Named, [name.into()])
    }

    /// `(Named, [name, qualifiers...])`
    pub fn named_qualified(name: &str, qualifiers: impl IntoIterator<Item = i64>) -> Self {
        let discriminators = std::iter::once(Discriminator::from(name))
            .chain(qualifiers.into_iter().map(Discriminator::Int));
        Self::new(IdentityKind::Named, discriminators)
    }

    /// The application root
    pub fn app() -> Self {
        Self::named(APP)
    }

    /// Root aggregator of all aisles
    pub fn aisles() -> Self {
        Self::named(AISLES)
    }

    /// Root aggregator of all connections
    pub fn connections() -> Self {
        Self::named(CONNECTIONS)
    }

    /// Root aggregator of every shuttle in every aisle
    pub fn all_shuttles() -> Self {
        Self::named(ALL_SHUTTLES)
    }

    /// Aggregator of one aisle's shuttles
    pub fn aisle_shuttles(aisle_num: i64) -> Self {
        Self::named_qualified(SHUTTLES, [aisle_num])
    }

    /// Private slot: owning aisle number of shuttle `(aisle_num, num)`
    pub fn shuttle_aisle_num_slot(aisle_num: i64, num: i64) -> Self {
        Self::named_qualified(SLOT_AISLE_NUM, [aisle_num, num])
    }

    /// Private slot: own number of shuttle `(aisle_num, num)`
    pub fn shuttle_num_slot(aisle_num: i64, num: i64) -> Self {
        Self::named_qualified(SLOT_NUM, [aisle_num, num])
    }

    /// Private slot: connection referenced by shuttle `(aisle_num, num)`
    pub fn shuttle_connection_slot(aisle_num: i64, num: i64) -> Self {
        Self::named_qualified(SLOT_CONNECTION, [aisle_num, num])
    }

    /// Kind tag
    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// Ordered discriminators
    pub fn discriminators(&self) -> &[Discriminator] {
        &self.discriminators
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},[", self.kind)?;
        for (i, d) in self.discriminators.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{d}")?;
        }
        f.write_str("])")
    }
}
