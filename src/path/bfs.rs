//! Breadth-first distance oracle.
//!
//! Every edge counts as one hop regardless of its travel time. The search
//! from a given source runs at most once per oracle: its predecessor tree is
//! cached and routes to any destination are read back from it.

use std::collections::{HashMap, VecDeque};

use crate::board::{NodeId, WorldState};

use super::DistanceOracle;

/// Predecessor of every node reached from one source.
type Tree = HashMap<NodeId, NodeId>;

/// Memoizing BFS oracle borrowing a snapshot for the duration of one call.
pub struct BfsOracle<'a> {
    state: &'a WorldState,
    trees: HashMap<NodeId, Tree>,
}

impl<'a> BfsOracle<'a> {
    pub fn new(state: &'a WorldState) -> Self {
        BfsOracle {
            state,
            trees: HashMap::new(),
        }
    }

    /// Number of sources searched so far.
    pub fn searched(&self) -> usize {
        self.trees.len()
    }

    fn tree(&mut self, src: &NodeId) -> &Tree {
        let state = self.state;
        self.trees
            .entry(src.clone())
            .or_insert_with(|| build_tree(state, src))
    }
}

/// Runs BFS from `src`, visiting neighbors in destination order so that
/// equal-length routes resolve the same way every time.
fn build_tree(state: &WorldState, src: &NodeId) -> Tree {
    let mut parent = Tree::new();
    if state.node(src).is_none() {
        return parent;
    }
    let mut queue = VecDeque::new();
    queue.push_back(src.clone());

    while let Some(cur) = queue.pop_front() {
        for next in state.neighbors(&cur) {
            if next == src || parent.contains_key(next) {
                continue;
            }
            parent.insert(next.clone(), cur.clone());
            queue.push_back(next.clone());
        }
    }
    parent
}

impl DistanceOracle for BfsOracle<'_> {
    fn route(&mut self, src: &NodeId, dst: &NodeId) -> Option<Vec<NodeId>> {
        if src == dst {
            return self.state.node(src).map(|_| Vec::new());
        }
        let tree = self.tree(src);
        if !tree.contains_key(dst) {
            return None;
        }
        let mut route = Vec::new();
        let mut cur = dst;
        while cur != src {
            route.push(cur.clone());
            cur = tree.get(cur)?;
        }
        route.reverse();
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    /// a - b - c - d, plus an isolated node x and a one-way edge d -> e.
    fn board() -> WorldState {
        let mut state = WorldState::empty();
        for n in ["a", "b", "c", "d", "e", "x"] {
            state.add_node(n, 1);
        }
        state.connect("a", "b", 1);
        state.connect("b", "c", 3);
        state.connect("c", "d", 1);
        state.add_edge("d", "e", 1);
        state
    }

    #[test]
    fn route_to_self_is_empty_not_missing() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.route(&id("a"), &id("a")), Some(vec![]));
        assert_eq!(oracle.distance(&id("a"), &id("a")), Some(0));
        assert_eq!(oracle.first_hop(&id("a"), &id("a")), None);
    }

    #[test]
    fn route_lists_hops_after_source() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(
            oracle.route(&id("a"), &id("d")),
            Some(vec![id("b"), id("c"), id("d")])
        );
        assert_eq!(oracle.distance(&id("a"), &id("d")), Some(3));
        assert_eq!(oracle.first_hop(&id("a"), &id("d")), Some(id("b")));
    }

    #[test]
    fn travel_time_does_not_change_hop_count() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.distance(&id("b"), &id("c")), Some(1));
    }

    #[test]
    fn unreachable_is_none() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.route(&id("a"), &id("x")), None);
        assert_eq!(oracle.distance(&id("x"), &id("a")), None);
        assert_eq!(oracle.first_hop(&id("a"), &id("x")), None);
    }

    #[test]
    fn edges_are_directed() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.distance(&id("a"), &id("e")), Some(4));
        assert_eq!(oracle.distance(&id("e"), &id("a")), None);
    }

    #[test]
    fn unknown_nodes_are_unreachable() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.route(&id("nope"), &id("nope")), None);
        assert_eq!(oracle.route(&id("a"), &id("nope")), None);
    }

    #[test]
    fn ties_resolve_through_lowest_neighbor() {
        let mut state = WorldState::empty();
        for n in ["s", "m1", "m2", "t"] {
            state.add_node(n, 1);
        }
        state.connect("s", "m2", 1);
        state.connect("s", "m1", 1);
        state.connect("m1", "t", 1);
        state.connect("m2", "t", 1);
        let mut oracle = BfsOracle::new(&state);
        assert_eq!(oracle.first_hop(&id("s"), &id("t")), Some(id("m1")));
    }

    #[test]
    fn searches_each_source_once() {
        let state = board();
        let mut oracle = BfsOracle::new(&state);
        oracle.distance(&id("a"), &id("b"));
        oracle.distance(&id("a"), &id("c"));
        oracle.distance(&id("a"), &id("d"));
        assert_eq!(oracle.searched(), 1);
        oracle.distance(&id("b"), &id("d"));
        assert_eq!(oracle.searched(), 2);
    }
}
