//! Balanced strategy.
//!
//! Aims to multiply as fast as possible. Every node has an attraction: how
//! much growth one more friendly unit there would bring. Each friendly node
//! spreads its surplus across its outgoing edges in proportion to the
//! distance-weighted attraction of the nodes each edge leads towards.

use std::collections::BTreeMap;

use tracing::info;

use crate::board::{NodeId, Order, PlayerId, WorldState};
use crate::path::{BfsOracle, DistanceOracle};

use super::Strategy;

/// Attraction of a node without friendly units.
const UNCLAIMED_ATTRACTION: f64 = 1.0;

/// Attraction per friendly unit relative to node size.
const GROWTH_WEIGHT: f64 = 0.2;

/// Spreads surplus units towards growth, weighted by distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedStrategy;

impl Strategy for BalancedStrategy {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn orders(&self, me: &PlayerId, state: &WorldState) -> Vec<Order> {
        let mut oracle = BfsOracle::new(state);
        let orders = balanced_orders(me, state, &mut oracle);
        info!(player = %me, orders = orders.len(), "balanced orders computed");
        orders
    }
}

/// Attraction of every node for `me`.
pub fn attractions(me: &PlayerId, state: &WorldState) -> BTreeMap<NodeId, f64> {
    state
        .nodes
        .values()
        .map(|node| {
            let friendly = node.units.friendly(me);
            let base = if friendly < 1 { UNCLAIMED_ATTRACTION } else { 0.0 };
            let size = node.size.max(1);
            let growth = GROWTH_WEIGHT * f64::from(friendly) / f64::from(size);
            (node.id.clone(), base + growth)
        })
        .collect()
}

/// Computes balanced orders for `me`.
pub fn balanced_orders<O: DistanceOracle + ?Sized>(
    me: &PlayerId,
    state: &WorldState,
    oracle: &mut O,
) -> Vec<Order> {
    let attraction = attractions(me, state);
    let mut orders = Vec::new();

    for node in state.nodes.values() {
        let friendly = node.units.friendly(me);
        if friendly <= 1 {
            continue;
        }
        let mut units = friendly - 1;

        // Attraction pulling along each first hop; the node's own id stands
        // for staying put.
        let mut pull: BTreeMap<NodeId, f64> = BTreeMap::new();
        let mut total = 0.0;
        for (dest, &att) in &attraction {
            let (hop, weighted) = match oracle.route(&node.id, dest) {
                Some(route) if !route.is_empty() => {
                    (route[0].clone(), att / route.len() as f64)
                }
                _ => (node.id.clone(), att),
            };
            *pull.entry(hop).or_insert(0.0) += weighted;
            total += weighted;
        }

        for (hop, att) in pull {
            if att > total {
                total = att;
            }
            let send = if total > 0.0 {
                ((f64::from(units) * att / total) as u32).min(units)
            } else {
                0
            };
            units -= send;
            total -= att;
            if send > 0 && hop != node.id {
                orders.push(Order::new(node.id.clone(), hop, send));
            }
        }
    }
    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn me() -> PlayerId {
        PlayerId::from("me")
    }

    #[test]
    fn empty_nodes_attract_most() {
        let mut state = WorldState::empty();
        state.add_node("empty", 10);
        state.add_node("mine", 10);
        state.add_node("zero", 0);
        state.set_units("mine", "me", 5);
        state.set_units("zero", "me", 1);
        let att = attractions(&me(), &state);
        assert_eq!(att[&id("empty")], 1.0);
        assert!((att[&id("mine")] - 0.1).abs() < 1e-9);
        assert!((att[&id("zero")] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn single_unit_stays_home() {
        let mut state = WorldState::empty();
        state.add_node("a", 10);
        state.add_node("b", 10);
        state.connect("a", "b", 1);
        state.set_units("a", "me", 1);
        assert!(BalancedStrategy.orders(&me(), &state).is_empty());
    }

    #[test]
    fn surplus_splits_towards_attraction() {
        // a(me 11, size 10) with two empty neighbors. Pulls: a itself
        // 0.22, b 1.0, c 1.0. Buckets in id order: a keeps floor(10*0.22/2.22)
        // = 0, b gets floor(10*1/2) = 5, c gets the remaining 5.
        let mut state = WorldState::empty();
        for n in ["a", "b", "c"] {
            state.add_node(n, 10);
        }
        state.connect("a", "b", 1);
        state.connect("a", "c", 1);
        state.set_units("a", "me", 11);
        assert_eq!(
            BalancedStrategy.orders(&me(), &state),
            vec![Order::new(id("a"), id("b"), 5), Order::new(id("a"), id("c"), 5)]
        );
    }

    #[test]
    fn never_orders_more_than_surplus() {
        let mut state = WorldState::empty();
        for n in ["a", "b", "c", "d"] {
            state.add_node(n, 3);
        }
        state.connect("a", "b", 1);
        state.connect("b", "c", 1);
        state.connect("a", "d", 1);
        state.set_units("a", "me", 7);
        state.set_units("c", "foe", 2);
        let orders = BalancedStrategy.orders(&me(), &state);
        let sent: u32 = orders.iter().map(|o| o.units).sum();
        assert!(sent <= 6);
        assert!(orders.iter().all(|o| o.src == id("a") && o.dst != id("a")));
    }

    #[test]
    fn unreachable_attraction_holds_units() {
        let mut state = WorldState::empty();
        state.add_node("a", 10);
        state.add_node("island", 10);
        state.set_units("a", "me", 4);
        assert!(BalancedStrategy.orders(&me(), &state).is_empty());
    }
}
