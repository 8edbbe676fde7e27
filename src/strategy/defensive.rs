//! Defensive strategy.
//!
//! Grows slowly and keeps garrisons: each friendly node sends single units
//! to neighbors nobody will reach sooner, keeps half its size at home, and
//! attacks the cheapest bordering enemy node with any excess.

use tracing::info;

use crate::board::{NodeId, Order, PlayerId, WorldState};
use crate::path::{BfsOracle, DistanceOracle};

use super::counts::count_all;
use super::Strategy;

/// Extra cost per hop when weighing an attack.
const HOP_PENALTY: f64 = 0.2;

/// Claims uncontested neighbors one unit at a time, then spends surplus on
/// the cheapest reachable fight.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefensiveStrategy;

impl Strategy for DefensiveStrategy {
    fn name(&self) -> &'static str {
        "defensive"
    }

    fn orders(&self, me: &PlayerId, state: &WorldState) -> Vec<Order> {
        let mut oracle = BfsOracle::new(state);
        let orders = defensive_orders(me, state, &mut oracle);
        info!(player = %me, orders = orders.len(), "defensive orders computed");
        orders
    }
}

/// Computes defensive orders for `me`.
pub fn defensive_orders<O: DistanceOracle + ?Sized>(
    me: &PlayerId,
    state: &WorldState,
    oracle: &mut O,
) -> Vec<Order> {
    let counts = count_all(me, state);
    let mut orders = Vec::new();

    for node in state.nodes.values() {
        let mut units = node.units.friendly(me);
        if units <= 1 {
            continue;
        }

        // Expand into neighbors that nothing will reach before us.
        for edge in &node.edges {
            if units <= 1 {
                break;
            }
            let beaten = counts
                .get(&edge.dst)
                .is_some_and(|c| c.delay <= edge.travel_time() as u32);
            if !beaten {
                orders.push(Order::new(node.id.clone(), edge.dst.clone(), 1));
                units -= 1;
            }
        }

        let Some(here) = counts.get(&node.id) else {
            continue;
        };
        let available = i64::from(here.units) - i64::from(here.enemy_units);
        let mut send = available.min(i64::from(units) - i64::from(node.size / 2));
        if send <= 0 {
            continue;
        }

        let mut cheapest: Option<(f64, NodeId)> = None;
        for (dst, c) in &counts {
            if *dst == node.id || !c.adjacent || c.enemy_units == 0 {
                continue;
            }
            let Some(route) = oracle.route(&node.id, dst) else {
                continue;
            };
            let Some(hop) = route.first() else {
                continue;
            };
            let losses = f64::from(c.enemy_units) - f64::from(c.units);
            let cost = losses * (1.0 + route.len() as f64 * HOP_PENALTY);
            if cheapest.as_ref().map_or(true, |(best, _)| cost < *best) {
                cheapest = Some((cost, hop.clone()));
            }
        }
        let Some((cost, hop)) = cheapest else {
            continue;
        };

        // Send enough to win outright when we can spare it.
        let needed = cost as i64;
        if needed < (i64::from(units) - 1).min(available) && needed > send {
            send = needed;
        }
        let send = send.min(i64::from(units) - 1);
        if send > 0 {
            orders.push(Order::new(node.id.clone(), hop, send as u32));
        }
    }
    orders
}
