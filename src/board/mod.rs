//! Battlefield representation.
//!
//! Contains the snapshot data structures: nodes, directed edges with
//! in-transit batches, per-owner unit counts, and movement orders.

pub mod edge;
pub mod node;
pub mod order;
pub mod state;
pub mod unit;

pub use edge::Edge;
pub use node::{Node, NodeId, PlayerId};
pub use order::Order;
pub use state::WorldState;
pub use unit::Units;
