//! Movement orders.
//!
//! An order moves a number of units from a node to one of its direct
//! neighbors. It is the only artifact produced by order computation and is
//! validated and applied by the external simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Move `units` from `src` towards the adjacent node `dst`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub src: NodeId,
    pub dst: NodeId,
    pub units: u32,
}

impl Order {
    pub fn new(src: NodeId, dst: NodeId, units: u32) -> Self {
        Order { src, dst, units }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} x{}", self.src, self.dst, self.units)
    }
}
