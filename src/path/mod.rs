//! Shortest-route queries over the battlefield graph.
//!
//! Strategies only need three questions answered: the route between two
//! nodes, its length in hops, and its first hop. `DistanceOracle` is the
//! seam; `BfsOracle` is the memoizing breadth-first implementation used by
//! default.

pub mod bfs;

pub use bfs::BfsOracle;

use crate::board::NodeId;

/// Answers shortest-route queries for one order computation.
///
/// `route` returns the nodes visited after `src`, ending with `dst`.
/// `None` means no route exists; `Some(vec![])` means `src == dst`.
pub trait DistanceOracle {
    fn route(&mut self, src: &NodeId, dst: &NodeId) -> Option<Vec<NodeId>>;

    /// Route length in hops, or `None` when unreachable.
    fn distance(&mut self, src: &NodeId, dst: &NodeId) -> Option<u32> {
        self.route(src, dst).map(|r| r.len() as u32)
    }

    /// The neighbor of `src` to move to next. `None` when unreachable or
    /// when `src == dst`.
    fn first_hop(&mut self, src: &NodeId, dst: &NodeId) -> Option<NodeId> {
        self.route(src, dst).and_then(|r| r.into_iter().next())
    }
}
