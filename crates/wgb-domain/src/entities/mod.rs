//! Leaf entities
//!
//! The objects the graph constructs. Each takes its already-resolved
//! arguments in declared order; none of them derives identities or looks
//! anything up.

use std::fmt;
use std::sync::Arc;

/// A connection shared by any number of shuttles
#[derive(Debug, PartialEq, Eq)]
pub struct Connection {
    num: i64,
}

impl Connection {
    pub fn new(num: i64) -> Self {
        Self { num }
    }

    pub fn num(&self) -> i64 {
        self.num
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connection{{num={}}}", self.num)
    }
}

/// A shuttle inside one aisle, bound to one connection
#[derive(Debug)]
pub struct Shuttle {
    aisle_num: i64,
    num: i64,
    connection: Arc<Connection>,
}

impl Shuttle {
    /// Arguments in declared order: owning aisle number, own number, connection
    pub fn new(aisle_num: i64, num: i64, connection: Arc<Connection>) -> Self {
        Self {
            aisle_num,
            num,
            connection,
        }
    }

    pub fn aisle_num(&self) -> i64 {
        self.aisle_num
    }

    pub fn num(&self) -> i64 {
        self.num
    }

    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }
}

impl fmt::Display for Shuttle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shuttle{{aisleNum={}, num={}, connection={}}}",
            self.aisle_num, self.num, self.connection.num
        )
    }
}

/// An aisle holding the shuttles configured for it
#[derive(Debug)]
pub struct Aisle {
    num: i64,
    shuttles: Vec<Arc<Shuttle>>,
}

impl Aisle {
    pub fn new(num: i64, shuttles: Vec<Arc<Shuttle>>) -> Self {
        Self { num, shuttles }
    }

    pub fn num(&self) -> i64 {
        self.num
    }

    pub fn shuttles(&self) -> &[Arc<Shuttle>] {
        &self.shuttles
    }
}

impl fmt::Display for Aisle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aisle{{num={}, shuttles={}}}", self.num, self.shuttles.len())
    }
}

/// Top-level singleton holding everything needed to run and tear down
#[derive(Debug)]
pub struct App {
    aisles: Vec<Arc<Aisle>>,
    connections: Vec<Arc<Connection>>,
}

impl App {
    pub fn new(aisles: Vec<Arc<Aisle>>, connections: Vec<Arc<Connection>>) -> Self {
        Self {
            aisles,
            connections,
        }
    }

    pub fn aisles(&self) -> &[Arc<Aisle>] {
        &self.aisles
    }

    pub fn connections(&self) -> &[Arc<Connection>] {
        &self.connections
    }

    /// Every shuttle reachable through the aisles, in aisle order
    pub fn shuttles(&self) -> impl Iterator<Item = &Arc<Shuttle>> {
        self.aisles.iter().flat_map(|a| a.shuttles.iter())
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "App")?;
        for aisle in &self.aisles {
            writeln!(f, "  {aisle}")?;
            for shuttle in &aisle.shuttles {
                writeln!(f, "    {shuttle}")?;
            }
        }
        for connection in &self.connections {
            writeln!(f, "  {connection}")?;
        }
        Ok(())
    }
}
