//! Per-node unit tallies.
//!
//! Summarizes, for every node, how many friendly and enemy units are on it
//! or heading to it, how soon the first of them arrives, and whether a
//! friendly-held node borders it.

use std::collections::BTreeMap;

use crate::board::{Edge, Node, NodeId, PlayerId, WorldState};

/// Delay reported for a node nothing is on or heading to.
pub const NO_UNITS_DELAY: u32 = 1000;

/// Units on and heading to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCounts {
    pub units: u32,
    pub enemy_units: u32,
    /// Turns until the first unit of any owner is there; 0 if occupied.
    pub delay: u32,
    /// Friendly units are on this node or on a node with an edge into it.
    pub adjacent: bool,
}

impl Default for UnitCounts {
    fn default() -> Self {
        UnitCounts {
            units: 0,
            enemy_units: 0,
            delay: NO_UNITS_DELAY,
            adjacent: false,
        }
    }
}

impl UnitCounts {
    fn tally(&mut self, friendly: bool, n: u32) {
        let slot = if friendly {
            &mut self.units
        } else {
            &mut self.enemy_units
        };
        *slot = slot.saturating_add(n);
    }

    fn merge(&mut self, other: &UnitCounts) {
        self.units = self.units.saturating_add(other.units);
        self.enemy_units = self.enemy_units.saturating_add(other.enemy_units);
        self.delay = self.delay.min(other.delay);
        self.adjacent |= other.adjacent;
    }
}

/// Tallies the batches travelling along `edge`.
pub fn count_edge(me: &PlayerId, edge: &Edge) -> UnitCounts {
    let mut counts = UnitCounts::default();
    for (i, slot) in edge.transit.iter().enumerate() {
        for (player, n) in slot.iter() {
            counts.tally(player == me, n);
            counts.delay = counts.delay.min(edge.arrival_delay(i));
        }
    }
    counts
}

/// Tallies the garrison of `node`.
pub fn count_node(me: &PlayerId, node: &Node) -> UnitCounts {
    let mut counts = UnitCounts::default();
    for (player, n) in node.units.iter() {
        counts.tally(player == me, n);
    }
    if counts.units > 0 {
        counts.delay = 0;
        counts.adjacent = true;
    }
    if counts.enemy_units > 0 {
        counts.delay = 0;
    }
    counts
}

/// Tallies every node: its garrison plus every batch heading to it.
///
/// Adjacency is resolved after all tallies are complete, so a node counts
/// as friendly-held for its neighbors when friendly units are on it or
/// arriving at it.
pub fn count_all(me: &PlayerId, state: &WorldState) -> BTreeMap<NodeId, UnitCounts> {
    let mut result: BTreeMap<NodeId, UnitCounts> = state
        .nodes
        .values()
        .map(|n| (n.id.clone(), count_node(me, n)))
        .collect();

    for edge in state.edges() {
        if let Some(c) = result.get_mut(&edge.dst) {
            c.merge(&count_edge(me, edge));
        }
    }

    let bordered: Vec<NodeId> = state
        .edges()
        .filter(|e| result.get(&e.src).is_some_and(|c| c.units > 0))
        .map(|e| e.dst.clone())
        .collect();
    for dst in bordered {
        if let Some(c) = result.get_mut(&dst) {
            c.adjacent = true;
        }
    }
    result
}
