//! World snapshot representation.
//!
//! Holds the complete read-only picture of the battlefield at the start of a
//! turn: every node with its garrison and every edge with its in-flight
//! batches. Order computation never mutates a `WorldState`.

use std::collections::{BTreeMap, BTreeSet};

use super::edge::Edge;
use super::node::{Node, NodeId, PlayerId};

/// Complete battlefield snapshot at a point in time.
///
/// Nodes are kept in a `BTreeMap` so every sweep over the board visits them
/// in `NodeId` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    pub nodes: BTreeMap<NodeId, Node>,
}

impl WorldState {
    /// Creates an empty snapshot with no nodes.
    pub fn empty() -> Self {
        WorldState::default()
    }

    /// Adds a node. Returns false if a node with the same id already exists.
    pub fn add_node(&mut self, id: impl Into<NodeId>, size: u32) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id.clone(), Node::new(id, size));
        true
    }

    /// Adds a directed edge. Returns false if either end is missing, the
    /// edge would be a self-loop, or it already exists.
    pub fn add_edge(&mut self, src: impl Into<NodeId>, dst: impl Into<NodeId>, travel_time: usize) -> bool {
        let (src, dst) = (src.into(), dst.into());
        if src == dst || !self.nodes.contains_key(&dst) {
            return false;
        }
        let Some(node) = self.nodes.get_mut(&src) else {
            return false;
        };
        match node.edges.binary_search_by(|e| e.dst.cmp(&dst)) {
            Ok(_) => false,
            Err(pos) => {
                node.edges.insert(pos, Edge::new(src, dst, travel_time));
                true
            }
        }
    }

    /// Adds edges in both directions with the same travel time.
    pub fn connect(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, travel_time: usize) -> bool {
        let (a, b) = (a.into(), b.into());
        let forward = self.add_edge(a.clone(), b.clone(), travel_time);
        let backward = self.add_edge(b, a, travel_time);
        forward && backward
    }

    /// Sets the garrison of `player` at `node`. Returns false if the node is missing.
    pub fn set_units(&mut self, node: impl Into<NodeId>, player: impl Into<PlayerId>, count: u32) -> bool {
        match self.nodes.get_mut(&node.into()) {
            Some(n) => {
                n.units.set(player.into(), count);
                true
            }
            None => false,
        }
    }

    /// Places `count` units of `player` on the edge `src -> dst`, arriving in
    /// `delay` turns. Returns false if the edge is missing or `delay` is out
    /// of range for its travel time.
    pub fn put_in_transit(
        &mut self,
        src: impl Into<NodeId>,
        dst: impl Into<NodeId>,
        player: impl Into<PlayerId>,
        delay: usize,
        count: u32,
    ) -> bool {
        let (src, dst) = (src.into(), dst.into());
        let Some(edge) = self
            .nodes
            .get_mut(&src)
            .and_then(|n| n.edges.iter_mut().find(|e| e.dst == dst))
        else {
            return false;
        };
        let len = edge.transit.len();
        if delay == 0 || delay > len {
            return false;
        }
        edge.transit[len - delay].add(player.into(), count);
        true
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of `id`, sorted by destination. Empty for unknown nodes.
    pub fn edges_from(&self, id: &NodeId) -> &[Edge] {
        self.nodes.get(id).map(|n| n.edges.as_slice()).unwrap_or(&[])
    }

    /// Direct neighbors of `id` in destination order.
    pub fn neighbors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.edges_from(id).iter().map(|e| &e.dst)
    }

    /// Every edge on the board, grouped by source node.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.nodes.values().flat_map(|n| n.edges.iter())
    }

    /// Every player owning units anywhere, on nodes or in transit.
    pub fn players(&self) -> BTreeSet<PlayerId> {
        let mut players = BTreeSet::new();
        for node in self.nodes.values() {
            players.extend(node.units.iter().map(|(p, _)| p.clone()));
            for edge in &node.edges {
                for slot in &edge.transit {
                    players.extend(slot.iter().map(|(p, _)| p.clone()));
                }
            }
        }
        players
    }
}
