//! Demand classification.
//!
//! Splits the board into nodes worth claiming and nodes worth fighting for.
//! Enemy presence is checked first: a node holding enemy units is contested
//! even when no friendly unit is there, and never also unclaimed.

use crate::board::{Node, NodeId, PlayerId, WorldState};

/// Why a node attracts units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemandKind {
    /// No friendly and no enemy units on the node.
    Unclaimed,
    /// Enemy units on the node, whether or not friendly units are there too.
    Contested,
}

/// Classifies a single node from `me`'s perspective. `None` for nodes held
/// by `me` alone.
pub fn classify_node(me: &PlayerId, node: &Node) -> Option<DemandKind> {
    if node.units.enemy(me) > 0 {
        Some(DemandKind::Contested)
    } else if node.units.friendly(me) == 0 {
        Some(DemandKind::Unclaimed)
    } else {
        None
    }
}

/// Disjoint demand sets, each sorted by `NodeId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demand {
    pub unclaimed: Vec<NodeId>,
    pub contested: Vec<NodeId>,
}

impl Demand {
    /// Classifies every node of the snapshot.
    pub fn classify(me: &PlayerId, state: &WorldState) -> Self {
        let mut demand = Demand::default();
        for node in state.nodes.values() {
            match classify_node(me, node) {
                Some(DemandKind::Contested) => demand.contested.push(node.id.clone()),
                Some(DemandKind::Unclaimed) => demand.unclaimed.push(node.id.clone()),
                None => {}
            }
        }
        demand
    }

    pub fn is_contested(&self, id: &NodeId) -> bool {
        self.contested.binary_search(id).is_ok()
    }

    pub fn is_unclaimed(&self, id: &NodeId) -> bool {
        self.unclaimed.binary_search(id).is_ok()
    }
}
