//! Battlefield locations and identifiers.
//!
//! Nodes are keyed by an opaque string identifier. Both identifier types are
//! ordered so that every container built from them iterates deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::unit::Units;

/// Opaque identifier of a battlefield location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Opaque identifier of a player (unit owner).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

/// A battlefield location holding units, with its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Capacity of the node. Read by the growth-oriented strategies only.
    pub size: u32,
    pub units: Units,
    /// Outgoing edges, sorted by destination.
    pub edges: Vec<Edge>,
}

impl Node {
    /// Creates an empty node with no units and no edges.
    pub fn new(id: NodeId, size: u32) -> Self {
        Node {
            id,
            size,
            units: Units::default(),
            edges: Vec::new(),
        }
    }

    /// Returns the outgoing edge towards `dst`, if any.
    pub fn edge_to(&self, dst: &NodeId) -> Option<&Edge> {
        self.edges
            .binary_search_by(|e| e.dst.cmp(dst))
            .ok()
            .map(|i| &self.edges[i])
    }
}
