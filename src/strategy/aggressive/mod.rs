//! Aggressive strategy.
//!
//! Leaves one unit to hold each owned node and sends everything else either
//! to claim new nodes or into battle:
//!
//! 1. Gather idle supply everywhere, including batches still in transit.
//! 2. Pair every unclaimed node with its nearest supply and serve the
//!    pairings cheapest first, re-pairing lazily when supply runs out.
//! 3. March whatever is still idle towards the nearest contested node.
//!
//! Everything is rebuilt from the snapshot on each call; nothing carries
//! over between turns.

pub mod assign;
pub mod demand;
pub mod redistribute;
pub mod supply;

pub use assign::{assign, best_candidate, Assignment, Candidate};
pub use demand::{classify_node, Demand, DemandKind};
pub use redistribute::redistribute;
pub use supply::{SupplyPool, DEFENDER_RESERVE};

use tracing::{debug, info};

use crate::board::{Order, PlayerId, WorldState};
use crate::path::{BfsOracle, DistanceOracle};

use super::Strategy;

/// Orders and diagnostics from one aggressive computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub orders: Vec<Order>,
    /// Idle units before assignment, in transit included.
    pub idle_before: u64,
    /// Idle units left after assignment.
    pub idle_after: u64,
    pub unclaimed: usize,
    pub contested: usize,
    pub requeued: usize,
    pub dropped: usize,
}

/// Computes the aggressive plan for `me` using `oracle` for distances.
pub fn plan<O: DistanceOracle + ?Sized>(me: &PlayerId, state: &WorldState, oracle: &mut O) -> Plan {
    let mut pool = SupplyPool::gather(me, state);
    let demand = Demand::classify(me, state);
    let idle_before = pool.total();
    debug!(
        player = %me,
        idle = idle_before,
        unclaimed = demand.unclaimed.len(),
        contested = demand.contested.len(),
        "supply and demand gathered"
    );

    let assignment = assign(&mut pool, &demand.unclaimed, oracle);
    let mut orders = assignment.orders;
    if !pool.is_empty() {
        orders.extend(redistribute(&pool, &demand, oracle));
    }

    Plan {
        orders,
        idle_before,
        idle_after: pool.total(),
        unclaimed: demand.unclaimed.len(),
        contested: demand.contested.len(),
        requeued: assignment.requeued,
        dropped: assignment.dropped,
    }
}

/// Claim-everything strategy: one unit per unclaimed node, the rest to war.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveStrategy;

impl Strategy for AggressiveStrategy {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn orders(&self, me: &PlayerId, state: &WorldState) -> Vec<Order> {
        let mut oracle = BfsOracle::new(state);
        let plan = plan(me, state, &mut oracle);
        info!(
            player = %me,
            orders = plan.orders.len(),
            idle = plan.idle_before,
            unclaimed = plan.unclaimed,
            contested = plan.contested,
            requeued = plan.requeued,
            "aggressive orders computed"
        );
        plan.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NodeId;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn me() -> PlayerId {
        PlayerId::from("me")
    }

    #[test]
    fn claims_nearest_then_attacks_with_leftover() {
        // A(me, 3) - B(empty) - C(foe, 2)
        let mut state = WorldState::empty();
        for n in ["A", "B", "C"] {
            state.add_node(n, 10);
        }
        state.connect("A", "B", 1);
        state.connect("B", "C", 1);
        state.set_units("A", "me", 3);
        state.set_units("C", "foe", 2);

        let orders = AggressiveStrategy.orders(&me(), &state);
        assert_eq!(
            orders,
            vec![
                Order::new(id("A"), id("B"), 1),
                Order::new(id("A"), id("B"), 1),
            ]
        );
    }

    #[test]
    fn isolated_supply_emits_nothing() {
        let mut state = WorldState::empty();
        for n in ["home", "other", "far", "foe"] {
            state.add_node(n, 10);
        }
        state.connect("home", "other", 1);
        state.connect("far", "foe", 1);
        state.set_units("home", "me", 5);
        state.set_units("other", "me", 1);
        state.set_units("far", "foe", 1);
        state.set_units("foe", "foe", 4);

        let mut oracle = BfsOracle::new(&state);
        let plan = plan(&me(), &state, &mut oracle);
        assert!(plan.orders.is_empty());
        assert_eq!(plan.idle_before, 4);
        assert_eq!(plan.idle_after, 4);
        assert_eq!(plan.contested, 2);
    }

    #[test]
    fn exact_supply_serves_every_demand_without_leftover() {
        // Two homes with one spare each, each next to one empty node, and a
        // foe node reachable from both.
        let mut state = WorldState::empty();
        for n in ["h1", "h2", "t1", "t2", "foe"] {
            state.add_node(n, 10);
        }
        state.connect("h1", "t1", 1);
        state.connect("h2", "t2", 1);
        state.connect("h1", "foe", 1);
        state.connect("h2", "foe", 1);
        state.set_units("h1", "me", 2);
        state.set_units("h2", "me", 2);
        state.set_units("foe", "foe", 3);

        let mut oracle = BfsOracle::new(&state);
        let plan = plan(&me(), &state, &mut oracle);
        assert_eq!(
            plan.orders,
            vec![
                Order::new(id("h1"), id("t1"), 1),
                Order::new(id("h2"), id("t2"), 1),
            ]
        );
        assert_eq!(plan.idle_after, 0);
    }

    #[test]
    fn unit_counts_near_u32_max_are_planned_without_overflow() {
        let json = r#"{"nodes":[
            {"id":"A","size":10,"units":{"x":4294967295,"y":1,"me":2},"edges":[{"dst":"B","units":[{}]}]},
            {"id":"B","size":10,"edges":[{"dst":"A","units":[{}]}]}
        ]}"#;
        let state = crate::protocol::json::parse_snapshot(json).unwrap();
        assert_eq!(
            AggressiveStrategy.orders(&me(), &state),
            vec![Order::new(id("A"), id("B"), 1)]
        );

        let x = PlayerId::from("x");
        let mut oracle = BfsOracle::new(&state);
        let plan = plan(&x, &state, &mut oracle);
        assert_eq!(plan.orders, vec![Order::new(id("A"), id("B"), 1)]);
        assert_eq!(plan.idle_before, u64::from(u32::MAX - 1));
        assert_eq!(plan.idle_after, u64::from(u32::MAX - 2));
    }

    #[test]
    fn equal_cost_tie_goes_to_lowest_node_id() {
        let mut state = WorldState::empty();
        for n in ["home", "north", "east"] {
            state.add_node(n, 10);
        }
        state.connect("home", "north", 1);
        state.connect("home", "east", 1);
        state.set_units("home", "me", 2);
        let orders = AggressiveStrategy.orders(&me(), &state);
        assert_eq!(orders, vec![Order::new(id("home"), id("east"), 1)]);
    }

    #[test]
    fn no_units_no_orders() {
        let mut state = WorldState::empty();
        state.add_node("a", 1);
        state.add_node("b", 1);
        state.connect("a", "b", 1);
        assert!(AggressiveStrategy.orders(&me(), &state).is_empty());
    }
}
