//! Directed edges and the unit batches travelling along them.

use super::node::{NodeId, PlayerId};
use super::unit::Units;

/// A directed connection between two nodes.
///
/// `transit` holds one slot per turn of travel time. The last slot is the
/// nearest to arrival: slot `i` lands at `dst` in `transit.len() - i` turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub src: NodeId,
    pub dst: NodeId,
    pub transit: Vec<Units>,
}

impl Edge {
    /// Creates an empty edge with `travel_time` transit slots.
    pub fn new(src: NodeId, dst: NodeId, travel_time: usize) -> Self {
        Edge {
            src,
            dst,
            transit: vec![Units::default(); travel_time],
        }
    }

    /// Number of turns a batch leaving `src` now needs to reach `dst`.
    pub fn travel_time(&self) -> usize {
        self.transit.len()
    }

    /// Turns until the batch in slot `index` arrives.
    pub fn arrival_delay(&self, index: usize) -> u32 {
        (self.transit.len() - index) as u32
    }

    /// Iterates `(delay, count)` for every slot holding units of `player`.
    pub fn in_transit<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = (u32, u32)> + 'a {
        self.transit
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| match slot.get(player) {
                0 => None,
                n => Some((self.arrival_delay(i), n)),
            })
    }
}
