//! Leftover redistribution.
//!
//! After assignment, any supply still idle at delay 0 marches towards the
//! nearest contested node. Supply sitting on a contested node stays to fight.

use crate::board::{NodeId, Order};
use crate::path::DistanceOracle;

use super::demand::Demand;
use super::supply::SupplyPool;

/// Moves every origin's leftover delay-0 units one hop towards its nearest
/// contested node. Ties go to the first contested node in `NodeId` order.
/// Origins with no reachable contested node keep their units.
pub fn redistribute<O: DistanceOracle + ?Sized>(
    pool: &SupplyPool,
    demand: &Demand,
    oracle: &mut O,
) -> Vec<Order> {
    let mut orders = Vec::new();
    for (origin, units) in pool.idle_now() {
        if demand.is_contested(origin) {
            continue;
        }
        let Some(target) = nearest(origin, &demand.contested, oracle) else {
            continue;
        };
        if let Some(hop) = oracle.first_hop(origin, &target) {
            orders.push(Order::new(origin.clone(), hop, units));
        }
    }
    orders
}

fn nearest<O: DistanceOracle + ?Sized>(
    origin: &NodeId,
    targets: &[NodeId],
    oracle: &mut O,
) -> Option<NodeId> {
    let mut best: Option<(u32, &NodeId)> = None;
    for target in targets {
        let Some(dist) = oracle.distance(origin, target) else {
            continue;
        };
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, target));
        }
    }
    best.map(|(_, t)| t.clone())
}
